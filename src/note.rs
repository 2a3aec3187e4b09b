//! Note input model.
//!
//! Notes arrive from an external REST layer whose field shapes are not
//! guaranteed. Deserialization is lenient: scalars are coerced to strings,
//! nulls become `None`, and anything else degrades to an absent field instead
//! of failing the whole record.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Declared tags on a note, either a list or a single delimited string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagField {
    /// Pre-split tag entries, possibly still carrying `#` prefixes.
    List(Vec<String>),
    /// A delimited string such as `"#前端, 工具"`.
    Text(String),
}

/// A user-authored note as delivered by the backend.
///
/// All fields are optional. The body conventionally reads: name on the
/// first line, description lines, the URL, then a tag line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Note {
    /// Explicit title, preferred over the first content line.
    pub title: Option<String>,

    /// Freeform multi-line body.
    pub content: Option<String>,

    /// Explicit link, preferred over any URL found in the content.
    pub url: Option<String>,

    /// Declared tags.
    pub tags: Option<TagField>,
}

impl Note {
    /// Create a note carrying only a body.
    #[must_use]
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Body text, or an empty string when absent.
    #[must_use]
    pub fn content_str(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    /// Build a note from an arbitrary JSON value.
    ///
    /// Non-object values yield the empty note. Unknown keys (`id`, `color`,
    /// timestamps, ...) are ignored.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Self::default();
        };

        Self {
            title: map.get("title").and_then(coerce_scalar),
            content: map.get("content").and_then(coerce_scalar),
            url: map.get("url").and_then(coerce_scalar),
            tags: map.get("tags").and_then(coerce_tags),
        }
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Coerce a JSON scalar to a string; containers and null yield `None`.
fn coerce_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn coerce_tags(value: &Value) -> Option<TagField> {
    match value {
        Value::Array(items) => Some(TagField::List(
            items
                .iter()
                .map(|item| coerce_scalar(item).unwrap_or_default())
                .collect(),
        )),
        other => coerce_scalar(other).map(TagField::Text),
    }
}
