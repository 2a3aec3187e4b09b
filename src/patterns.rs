//! Compiled regex patterns for note parsing.
//!
//! All patterns are compiled once on first use with `LazyLock`.
//! Patterns are organized by the stage of the extraction pipeline that uses them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Line Splitting
// =============================================================================

/// One or more consecutive line breaks, LF or CRLF.
pub static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\r?\n)+").expect("LINE_BREAKS regex"));

/// Runs of whitespace (Unicode-aware, so U+3000 is included).
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

// =============================================================================
// URL Detection
// =============================================================================

/// An http(s) URL token.
///
/// The token stops at whitespace, a closing paren or bracket, or one of the
/// full-width marks that commonly follow a link in CJK prose (`。`, `；`, `，`).
pub static HTTP_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://[^\s)\]\x{3002}\x{FF1B}\x{FF0C}]+").expect("HTTP_URL regex")
});

// =============================================================================
// Tag Detection
// =============================================================================

/// Leading `tags:` / `tag:` / `标签:` marker (ASCII or full-width colon).
///
/// The colon is required: `tags rust web` is an ordinary line.
pub static TAG_LINE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:标签|tags?)\s*[:\x{FF1A}]").expect("TAG_LINE_MARKER regex")
});

/// A line made only of `#token` groups separated by whitespace.
pub static HASHTAG_ONLY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[\p{L}\p{N}_-]+(?:\s+#[\p{L}\p{N}_-]+)*$").expect("HASHTAG_ONLY_LINE regex")
});

/// Inline `#token` occurrence; group 1 is the token without the hash.
pub static INLINE_HASHTAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([\p{L}\p{N}_-]+)").expect("INLINE_HASHTAG regex"));

/// Separators accepted in a string-valued `tags` field.
///
/// Whitespace (including full-width space), ASCII and full-width commas,
/// the ideographic enumeration comma, and ASCII and full-width semicolons.
pub static TAG_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s,\x{FF0C}\x{3001};\x{FF1B}]+").expect("TAG_SEPARATOR regex")
});

// =============================================================================
// Name Cleaning
// =============================================================================

/// Quote and bracket characters stripped from a name line.
pub static NAME_QUOTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"["'“”‘’《》「」『』【】（）\[\]()]+"#).expect("NAME_QUOTES regex")
});
