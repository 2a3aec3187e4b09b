//! URL Utility Functions
//!
//! Locating links inside note text and deriving display hostnames from them.

use url::Url;

use crate::patterns::HTTP_URL;

/// A URL found on a specific line of a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMatch {
    /// Zero-based index into the line sequence.
    pub index: usize,
    /// The matched URL text.
    pub url: String,
}

/// Find the URL line closest to the end of `lines`.
///
/// Scans from the last line toward the first and returns the first line
/// containing an http(s) URL. Notes conventionally end with a tag line
/// preceded by the link, so scanning backward finds the link without
/// having to recognize the tag line first.
///
/// The scan direction matters: with several URL-bearing lines, the last
/// one wins.
#[must_use]
pub fn locate_url_line<S: AsRef<str>>(lines: &[S]) -> Option<UrlMatch> {
    lines.iter().enumerate().rev().find_map(|(index, line)| {
        HTTP_URL.find(line.as_ref()).map(|m| UrlMatch {
            index,
            url: m.as_str().to_string(),
        })
    })
}

/// Return the first http(s) URL anywhere in `text`, scanning forward.
#[must_use]
pub fn first_url(text: &str) -> Option<&str> {
    HTTP_URL.find(text).map(|m| m.as_str())
}

/// Check whether `text` contains an http(s) URL.
#[must_use]
pub fn contains_url(text: &str) -> bool {
    HTTP_URL.is_match(text)
}

/// Extract the hostname from an absolute URL.
///
/// # Returns
/// * The hostname, or `None` when the URL does not parse or has no host
#[must_use]
pub fn extract_hostname(url_str: &str) -> Option<String> {
    let parsed = Url::parse(url_str.trim()).ok()?;
    parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .map(std::string::ToString::to_string)
}

/// Hostname for display, falling back to the raw URL string.
///
/// Returns an empty string only when `url_str` is empty.
#[must_use]
pub fn display_host(url_str: &str) -> String {
    extract_hostname(url_str).unwrap_or_else(|| url_str.to_string())
}
