//! # site-notes
//!
//! Structured site extraction from freeform bookmark notes.
//!
//! Users share sites as loosely formatted notes: a name on the first line,
//! a few lines of description, the link, and a line of `#tags`. This library
//! turns such notes into display-ready records and answers tag-membership
//! queries for client-side filtering.
//!
//! ## Quick Start
//!
//! ```rust
//! use site_notes::{extract, has_tag, Note};
//!
//! let note = Note::from_content(
//!     "MySite\nA great tool for X\nhttps://example.com/page\n#tag1 #tag2",
//! );
//!
//! let card = extract(&note);
//! assert_eq!(card.name, "MySite");
//! assert_eq!(card.description, "A great tool for X");
//! assert_eq!(card.url, "https://example.com/page");
//! assert!(has_tag(&note, "TAG1", true));
//! ```
//!
//! ## Features
//!
//! - **Ordered fallbacks**: every field resolves through a fixed precedence
//!   chain and never fails
//! - **Unicode-aware tags**: `#前端` is as valid as `#frontend`
//! - **Lenient input**: notes with missing or oddly typed fields still extract
//! - **Pure**: no I/O, no caching, identical input yields identical output

mod error;
mod options;
mod patterns;
mod result;

/// Note input model with lenient deserialization.
pub mod note;

/// Line splitting and snippet helpers.
pub mod text;

/// URL location and hostname helpers.
pub mod url_utils;

/// Tag normalization, inline tag scanning, and tag-line detection.
pub mod tags;

/// Field resolvers (URL, name, description) and site-card assembly.
pub mod extract;

/// Tag filtering over note collections and the open-site action.
pub mod filter;

/// Character encoding detection and transcoding of note payloads.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::{
    display_description, display_name, extract_site_card, parse_site_info, resolve_url,
    summary_snippet,
};
pub use filter::{filter_by_tag, open_site, Opener};
pub use note::{Note, TagField};
pub use options::Options;
pub use result::{SiteCard, SiteInfo};
pub use tags::{has_tag, tag_set};

use serde_json::Value;

/// Resolves every display field of a note using default options.
///
/// # Example
///
/// ```rust
/// use site_notes::{extract, Note};
///
/// let card = extract(&Note::default());
/// assert_eq!(card.name, "未知站点");
/// assert!(card.url.is_empty());
/// ```
#[must_use]
pub fn extract(note: &Note) -> SiteCard {
    extract_site_card(note, &Options::default())
}

/// Resolves every display field of a note with custom options.
///
/// # Example
///
/// ```rust
/// use site_notes::{extract_with_options, Note, Options};
///
/// let options = Options {
///     unknown_site_placeholder: "Unknown".to_string(),
///     ..Options::default()
/// };
/// let card = extract_with_options(&Note::default(), &options);
/// assert_eq!(card.name, "Unknown");
/// ```
#[must_use]
pub fn extract_with_options(note: &Note, options: &Options) -> SiteCard {
    extract_site_card(note, options)
}

/// Decodes notes from a JSON payload with automatic encoding detection.
///
/// The payload is either a single note object or an array of notes. Array
/// entries that are not objects become empty notes rather than errors.
///
/// # Errors
///
/// Returns [`Error::Json`] for malformed JSON and [`Error::InvalidInput`]
/// when the top-level value is neither an object nor an array.
pub fn parse_notes(bytes: &[u8]) -> Result<Vec<Note>> {
    let text = encoding::transcode_to_utf8(bytes);
    parse_notes_str(&text)
}

/// Decodes notes from an already-decoded JSON string.
///
/// See [`parse_notes`] for the accepted shapes.
pub fn parse_notes_str(text: &str) -> Result<Vec<Note>> {
    let value: Value = serde_json::from_str(text)?;
    match value {
        Value::Array(items) => Ok(items.iter().map(Note::from_value).collect()),
        Value::Object(_) => Ok(vec![Note::from_value(&value)]),
        other => Err(Error::InvalidInput(format!(
            "expected a note object or array, found {}",
            json_kind(&other)
        ))),
    }
}

/// Extracts site cards from a JSON payload using default options.
///
/// # Example
///
/// ```rust
/// use site_notes::extract_bytes;
///
/// let payload = br#"[{"content": "Docs\nhttps://docs.rs"}, {"url": "https://crates.io"}]"#;
/// let cards = extract_bytes(payload)?;
/// assert_eq!(cards[0].name, "Docs");
/// assert_eq!(cards[1].name, "crates.io");
/// # Ok::<(), site_notes::Error>(())
/// ```
pub fn extract_bytes(bytes: &[u8]) -> Result<Vec<SiteCard>> {
    extract_bytes_with_options(bytes, &Options::default())
}

/// Extracts site cards from a JSON payload with custom options.
pub fn extract_bytes_with_options(bytes: &[u8], options: &Options) -> Result<Vec<SiteCard>> {
    let notes = parse_notes(bytes)?;
    Ok(notes
        .iter()
        .map(|note| extract_site_card(note, options))
        .collect())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
