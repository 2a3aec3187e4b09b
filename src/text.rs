//! Text normalization helpers.
//!
//! Line splitting turns a raw note body into the ordered, non-empty line
//! sequence every field resolver works from. Snippets produce short,
//! single-line previews of arbitrary text.

use crate::patterns::{LINE_BREAKS, NAME_QUOTES, WHITESPACE_NORMALIZE};

/// Split raw note text into trimmed, non-empty lines.
///
/// Backticks are removed first (notes are often pasted from Markdown code
/// spans), then the text is trimmed and split on runs of LF/CRLF line breaks.
/// Whitespace-only input yields an empty vector.
///
/// # Examples
///
/// ```
/// use site_notes::text::split_lines;
///
/// let lines = split_lines("`MySite`\r\n\r\n  A tool  \nhttps://example.com\n");
/// assert_eq!(lines, vec!["MySite", "A tool", "https://example.com"]);
/// assert!(split_lines("  \n\t ").is_empty());
/// ```
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    let cleaned = text.replace('`', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Vec::new();
    }

    LINE_BREAKS
        .split(cleaned)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Collapse whitespace runs to a single space and trim.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}

/// Build a single-line preview capped at `max_chars` characters.
///
/// Counts Unicode scalar values, not bytes, so CJK text is never split
/// mid-character. `ellipsis` is appended only when the text was cut.
#[must_use]
pub fn snippet(text: &str, max_chars: usize, ellipsis: &str) -> String {
    let collapsed = collapse_whitespace(text);
    match collapsed.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ellipsis}", &collapsed[..cut]),
        None => collapsed,
    }
}

/// Strip ASCII and CJK quote/bracket characters from a name line.
#[must_use]
pub fn strip_name_quotes(line: &str) -> String {
    NAME_QUOTES.replace_all(line, "").trim().to_string()
}
