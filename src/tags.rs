//! Tag normalization and tag-line detection.
//!
//! Tags come from two places: the note's declared `tags` field and inline
//! `#token` markers in the body. The combined set keeps field tags first,
//! then inline tags in order of appearance. Duplicates across (or within)
//! the two sources are kept as-is.

use crate::note::{Note, TagField};
use crate::patterns::{HASHTAG_ONLY_LINE, INLINE_HASHTAG, TAG_LINE_MARKER, TAG_SEPARATOR};

/// Check whether a line carries only tags.
///
/// True for lines starting with a `tags:`/`标签:` marker (case-insensitive),
/// or lines made entirely of whitespace-separated `#token` groups.
#[must_use]
pub fn is_tag_line(line: &str) -> bool {
    let line = line.trim();
    if line.is_empty() {
        return false;
    }
    TAG_LINE_MARKER.is_match(line) || HASHTAG_ONLY_LINE.is_match(line)
}

fn clean_tag(raw: &str) -> Option<String> {
    let tag = raw.trim_start_matches('#').trim();
    (!tag.is_empty()).then(|| tag.to_string())
}

/// Normalize a declared `tags` field.
///
/// List entries and delimited string parts have leading `#` characters
/// stripped, then are trimmed; empty results are dropped. A `#` behind
/// leading whitespace in a list entry is kept.
#[must_use]
pub fn normalize_tags(tags: Option<&TagField>) -> Vec<String> {
    match tags {
        Some(TagField::List(items)) => items.iter().filter_map(|t| clean_tag(t)).collect(),
        Some(TagField::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Vec::new();
            }
            TAG_SEPARATOR.split(text).filter_map(clean_tag).collect()
        }
        None => Vec::new(),
    }
}

/// Collect inline `#token` tags from free text, in order of appearance.
#[must_use]
pub fn inline_tags(text: &str) -> Vec<String> {
    INLINE_HASHTAG
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Full tag set of a note: declared tags followed by inline tags.
///
/// No deduplication is performed.
#[must_use]
pub fn tag_set(note: &Note) -> Vec<String> {
    let mut tags = normalize_tags(note.tags.as_ref());
    tags.extend(inline_tags(note.content_str()));
    tags
}

/// Check whether a note carries `target` as an exact tag.
///
/// Both the declared field and inline tags are considered. Partial matches
/// never count; with `case_insensitive` both sides are lower-cased first.
#[must_use]
pub fn has_tag(note: &Note, target: &str, case_insensitive: bool) -> bool {
    let target = target.trim();
    if target.is_empty() {
        return false;
    }

    let tags = tag_set(note);
    if case_insensitive {
        let target = target.to_lowercase();
        tags.iter().any(|t| t.to_lowercase() == target)
    } else {
        tags.iter().any(|t| t == target)
    }
}
