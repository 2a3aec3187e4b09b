//! Simple CLI that reads note JSON from stdin and outputs site cards as JSON.
//!
//! Usage: `extract_stdin [--encoding LABEL] [--tag TAG]`
//!
//! `--encoding` decodes the payload with an explicit label (e.g. `gbk`)
//! instead of BOM sniffing. `--tag` keeps only notes carrying that tag,
//! compared case-insensitively. Logs go to stderr; set `RUST_LOG` to tune.

use site_notes::encoding::transcode_with_label;
use site_notes::{extract, filter_by_tag, parse_notes, parse_notes_str, Note};
use std::env;
use std::io::{self, Read};
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct Args {
    encoding: Option<String>,
    tag: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--encoding" => args.encoding = Some(iter.next().ok_or("--encoding needs a value")?),
            "--tag" => args.tag = Some(iter.next().ok_or("--tag needs a value")?),
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(args)
}

fn decode(bytes: &[u8], encoding: Option<&str>) -> Result<Vec<Note>, String> {
    match encoding {
        Some(label) => {
            let text = transcode_with_label(bytes, label)
                .ok_or_else(|| format!("unknown encoding label: {label}"))?;
            parse_notes_str(&text).map_err(|e| e.to_string())
        }
        None => parse_notes(bytes).map_err(|e| e.to_string()),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            error!("{err}");
            return ExitCode::from(2);
        }
    };

    let mut bytes = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut bytes) {
        error!("failed to read stdin: {err}");
        return ExitCode::FAILURE;
    }

    let notes = match decode(&bytes, args.encoding.as_deref()) {
        Ok(notes) => notes,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let selected: Vec<&Note> = match args.tag.as_deref() {
        Some(tag) => filter_by_tag(&notes, tag, true),
        None => notes.iter().collect(),
    };
    info!(total = notes.len(), selected = selected.len(), "extracting notes");

    let cards: Vec<_> = selected.into_iter().map(extract).collect();
    let unlinked = cards.iter().filter(|card| !card.has_url()).count();
    if unlinked > 0 {
        warn!(unlinked, "some notes have no url to open");
    }
    match serde_json::to_string(&cards) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("failed to serialize output: {err}");
            ExitCode::FAILURE
        }
    }
}
