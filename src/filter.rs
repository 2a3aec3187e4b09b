//! Collection-level helpers: tag filtering and opening a note's site.

use tracing::debug;

use crate::extract::resolve_url;
use crate::note::Note;
use crate::tags::has_tag;

/// Keep the notes carrying `tag` exactly, in input order.
#[must_use]
pub fn filter_by_tag<'a>(notes: &'a [Note], tag: &str, case_insensitive: bool) -> Vec<&'a Note> {
    notes
        .iter()
        .filter(|note| has_tag(note, tag, case_insensitive))
        .collect()
}

/// Something that can open a URL in a new browsing context.
///
/// The extraction core stays pure; callers plug in a browser launcher,
/// a webview bridge, or a recorder for tests.
pub trait Opener {
    /// Open `url`. Only called with a non-empty URL.
    fn open(&mut self, url: &str);
}

/// Open the note's resolved URL.
///
/// Does nothing when the note has no URL. Returns whether `opener` was called.
pub fn open_site<O: Opener + ?Sized>(note: &Note, opener: &mut O) -> bool {
    let url = resolve_url(note);
    if url.is_empty() {
        debug!("note has no url, nothing to open");
        return false;
    }
    opener.open(&url);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        opened: Vec<String>,
    }

    impl Opener for Recorder {
        fn open(&mut self, url: &str) {
            self.opened.push(url.to_string());
        }
    }

    #[test]
    fn test_open_site_calls_opener() {
        let mut recorder = Recorder::default();
        let note = Note::from_content("Name\nhttps://a.com/x\n#t");
        assert!(open_site(&note, &mut recorder));
        assert_eq!(recorder.opened, vec!["https://a.com/x"]);
    }

    #[test]
    fn test_open_site_without_url_is_noop() {
        let mut recorder = Recorder::default();
        assert!(!open_site(&Note::from_content("no link"), &mut recorder));
        assert!(!open_site(&Note::default(), &mut recorder));
        assert!(recorder.opened.is_empty());
    }

    #[test]
    fn test_filter_by_tag_preserves_order() {
        let notes = vec![
            Note::from_content("A\n#Rust"),
            Note::from_content("B\n#go"),
            Note::from_content("C\n#rust #web"),
        ];

        let hits = filter_by_tag(&notes, "rust", true);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].content_str(), "A\n#Rust");
        assert_eq!(hits[1].content_str(), "C\n#rust #web");

        assert_eq!(filter_by_tag(&notes, "rust", false).len(), 1);
        assert!(filter_by_tag(&notes, "ru", true).is_empty());
    }
}
