//! Configuration options for note extraction.
//!
//! The `Options` struct controls the fallback text the resolvers produce.
//! Defaults reproduce the web client's display behavior.

/// Configuration options for note extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use site_notes::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     unknown_site_placeholder: "Unknown site".to_string(),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Display name used when a note has no title, content, or URL.
    ///
    /// Default: `"未知站点"`
    pub unknown_site_placeholder: String,

    /// Maximum characters of a content snippet used as a display name.
    ///
    /// Default: `36`
    pub name_snippet_len: usize,

    /// Maximum characters of a content snippet used as a summary.
    ///
    /// Default: `80`
    pub summary_snippet_len: usize,

    /// Marker appended to truncated snippets.
    ///
    /// Default: `"…"`
    pub ellipsis: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            unknown_site_placeholder: "未知站点".to_string(),
            name_snippet_len: 36,
            summary_snippet_len: 80,
            ellipsis: "…".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();
        assert_eq!(opts.unknown_site_placeholder, "未知站点");
        assert_eq!(opts.name_snippet_len, 36);
        assert_eq!(opts.summary_snippet_len, 80);
        assert_eq!(opts.ellipsis, "…");
    }

    #[test]
    fn test_custom_options() {
        let opts = Options {
            name_snippet_len: 10,
            ellipsis: "...".to_string(),
            ..Options::default()
        };
        assert_eq!(opts.name_snippet_len, 10);
        assert_eq!(opts.ellipsis, "...");
        assert_eq!(opts.summary_snippet_len, 80);
    }
}
