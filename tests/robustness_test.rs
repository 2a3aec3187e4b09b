use site_notes::text::split_lines;
use site_notes::{
    display_description, display_name, extract, resolve_url, tag_set, Note, Options, TagField,
};

const AWKWARD_INPUTS: [&str; 10] = [
    "",
    "   ",
    "\n\n\r\n",
    "```",
    "#",
    "#only #tags",
    "「」",
    "https://",
    "http://[::1",
    "名字\n\n\n\u{3000}\n描述\r\n",
];

#[test]
fn empty_note_yields_empty_fields_and_placeholder_name() {
    for note in [Note::default(), Note::from_content(""), Note::from_content("  \n ")] {
        let card = extract(&note);
        assert_eq!(card.name, "未知站点");
        assert_eq!(card.description, "");
        assert_eq!(card.url, "");
        assert!(card.tags.is_empty());
    }
}

#[test]
fn split_lines_never_returns_blank_lines() {
    for input in AWKWARD_INPUTS {
        for line in split_lines(input) {
            assert!(!line.trim().is_empty(), "blank line produced from {input:?}");
        }
    }
}

#[test]
fn extraction_is_idempotent() {
    for input in AWKWARD_INPUTS {
        let note = Note {
            content: Some(input.to_string()),
            tags: Some(TagField::Text("#a, b".to_string())),
            ..Note::default()
        };
        assert_eq!(extract(&note), extract(&note), "unstable result for {input:?}");
    }
}

#[test]
fn awkward_inputs_do_not_panic() {
    let opts = Options::default();
    for input in AWKWARD_INPUTS {
        let note = Note::from_content(input);
        let _ = display_name(&note, &opts);
        let _ = display_description(&note);
        let _ = resolve_url(&note);
        let _ = tag_set(&note);
    }
}

#[test]
fn unparseable_url_falls_back_to_raw_string_as_name() {
    let note = Note {
        url: Some("https://".to_string()),
        ..Note::default()
    };
    assert_eq!(display_name(&note, &Options::default()), "https://");
}

#[test]
fn content_of_only_quotes_falls_back_to_snippet() {
    let note = Note::from_content("「」");
    assert_eq!(display_name(&note, &Options::default()), "「」");
}

#[test]
fn long_unnamed_content_is_truncated_for_name() {
    let text = format!("“”\n{}", "word ".repeat(20));
    let name = display_name(&Note::from_content(text), &Options::default());
    assert_eq!(name.chars().count(), 37);
    assert!(name.ends_with('…'));
    assert!(name.starts_with("“” word word"));
}

#[test]
fn blank_title_and_url_fields_are_ignored() {
    let note = Note {
        title: Some("   ".to_string()),
        url: Some("\t".to_string()),
        content: Some("Real Name\nhttps://real.example.com".to_string()),
        tags: None,
    };
    let card = extract(&note);
    assert_eq!(card.name, "Real Name");
    assert_eq!(card.url, "https://real.example.com");
}
