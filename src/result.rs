//! Result types for extraction output.
//!
//! This module defines the structured records derived from a note. None of
//! them are persisted; they are recomputed from the note on demand.

use serde::{Deserialize, Serialize};

/// Site information parsed from a note body alone.
///
/// Produced by [`crate::extract::parse_site_info`] without looking at the
/// note's explicit `title`/`url` fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    /// First content line with quotes and brackets stripped.
    pub name: String,

    /// Lines between the name and the URL line, joined with spaces.
    pub description: String,

    /// URL found on the last URL-bearing line (empty unless past line 0).
    pub url: String,
}

/// Every derived display field of a note, resolved at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteCard {
    /// Display name (title, name line, hostname, snippet, or placeholder).
    pub name: String,

    /// Display description; may be empty.
    pub description: String,

    /// Resolved link; empty when the note carries none.
    pub url: String,

    /// Declared tags followed by inline tags, not deduplicated.
    pub tags: Vec<String>,
}

impl SiteCard {
    /// Whether the card has a link to open.
    #[must_use]
    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }
}
