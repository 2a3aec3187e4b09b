//! Field resolution for site notes.
//!
//! A note body conventionally reads:
//!
//! ```text
//! Site name
//! One or more description lines
//! https://example.com/page
//! #tag1 #tag2
//! ```
//!
//! Real notes drift from this layout, so every derived field is resolved by
//! its own ordered fallback chain. Each chain is total: it ends in an empty
//! string or a placeholder and never fails.

use tracing::{debug, trace};

use crate::note::Note;
use crate::options::Options;
use crate::result::{SiteCard, SiteInfo};
use crate::tags::{is_tag_line, tag_set};
use crate::text::{snippet, split_lines, strip_name_quotes};
use crate::url_utils::{contains_url, display_host, first_url, locate_url_line};

/// Parse name, description, and URL from a note body alone.
///
/// - `name` is line 0 with quotes and brackets stripped.
/// - If a URL line is found past line 0 (scanning backward), `url` is its
///   match and `description` joins the lines strictly between the name and
///   the URL line.
/// - Otherwise `description` joins every line after the name, leaving out a
///   trailing tag line.
#[must_use]
pub fn parse_site_info(content: &str) -> SiteInfo {
    let lines = split_lines(content);
    let Some(first) = lines.first() else {
        return SiteInfo::default();
    };

    let name = strip_name_quotes(first);
    let url_line = locate_url_line(&lines).filter(|m| m.index > 0);

    let (description, url) = match url_line {
        Some(m) => (lines[1..m.index].join(" ").trim().to_string(), m.url),
        None if lines.len() > 1 => {
            let end = if lines.last().is_some_and(|l| is_tag_line(l)) {
                lines.len() - 1
            } else {
                lines.len()
            };
            (lines[1..end].join(" ").trim().to_string(), String::new())
        }
        None => (String::new(), String::new()),
    };

    SiteInfo {
        name,
        description,
        url,
    }
}

/// Resolve the link a note points to.
///
/// 1. The explicit `url` field, trimmed.
/// 2. The URL on the last URL-bearing content line, if it is not line 0.
/// 3. The first URL anywhere in the raw content.
/// 4. Empty string.
#[must_use]
pub fn resolve_url(note: &Note) -> String {
    if let Some(direct) = note.url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        trace!(url = direct, "url from explicit field");
        return direct.to_string();
    }

    let content = note.content_str();
    let info = parse_site_info(content);
    if !info.url.is_empty() {
        trace!(url = %info.url, "url from content line");
        return info.url;
    }

    first_url(content).map_or_else(String::new, |url| {
        trace!(url, "url from forward scan");
        url.to_string()
    })
}

/// Resolve the name shown for a note.
///
/// 1. The explicit `title`, trimmed.
/// 2. The first content line, quotes and brackets stripped.
/// 3. The hostname of the resolved URL (or the raw URL if it has none).
/// 4. A whitespace-collapsed content snippet capped at
///    [`Options::name_snippet_len`] characters.
/// 5. [`Options::unknown_site_placeholder`].
#[must_use]
pub fn display_name(note: &Note, options: &Options) -> String {
    if let Some(title) = note.title.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        return title.to_string();
    }

    let content = note.content_str();
    let info = parse_site_info(content);
    if !info.name.is_empty() {
        return info.name;
    }

    let url = resolve_url(note);
    if !url.is_empty() {
        return display_host(&url);
    }

    let fallback = snippet(content, options.name_snippet_len, &options.ellipsis);
    if fallback.is_empty() {
        options.unknown_site_placeholder.clone()
    } else {
        fallback
    }
}

/// Resolve the description shown for a note.
///
/// Uses the description parsed from the content. When that is empty, a body
/// that has no URL and is not itself a tag line is used whole.
#[must_use]
pub fn display_description(note: &Note) -> String {
    let content = note.content_str();
    let info = parse_site_info(content);
    if !info.description.is_empty() {
        return info.description;
    }

    let whole = content.trim();
    if whole.is_empty() || contains_url(whole) || is_tag_line(whole) {
        return String::new();
    }
    whole.to_string()
}

/// Short summary for list views: the description, or a content snippet.
#[must_use]
pub fn summary_snippet(note: &Note, options: &Options) -> String {
    let description = display_description(note);
    let source = if description.is_empty() {
        note.content_str()
    } else {
        description.as_str()
    };
    snippet(source, options.summary_snippet_len, &options.ellipsis)
}

/// Resolve every derived field of a note.
#[must_use]
pub fn extract_site_card(note: &Note, options: &Options) -> SiteCard {
    let card = SiteCard {
        name: display_name(note, options),
        description: display_description(note),
        url: resolve_url(note),
        tags: tag_set(note),
    };
    debug!(
        name = %card.name,
        url = %card.url,
        tags = card.tags.len(),
        "extracted site card"
    );
    card
}
