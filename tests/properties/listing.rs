//! Property tests for the rendered listing.

use proptest::prelude::*;

use hexlist::domain::services::write_listing;
use hexlist::{annotate, OutputFormat};

fn render(content: &str) -> String {
    let mut buf = Vec::new();
    write_listing(&mut buf, annotate(content), OutputFormat::Text).unwrap();
    String::from_utf8(buf).unwrap()
}

/// Lines without terminators, joined back with `\n`.
fn document() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[ \t]{0,3}[ -~]{0,20}[ \t]{0,3}", 0..64)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: N input lines produce exactly N output lines.
    #[test]
    fn property_line_count_preserved(lines in document()) {
        let content: String = lines.iter().map(|l| format!("{l}\n")).collect();
        let out = render(&content);
        prop_assert_eq!(out.matches('\n').count(), lines.len());
    }

    /// PROPERTY: line i is addressed i * 4 in 8-digit lowercase hex.
    #[test]
    fn property_addresses_follow_position(lines in document()) {
        let content: String = lines.iter().map(|l| format!("{l}\n")).collect();
        let out = render(&content);

        for (i, line) in out.lines().enumerate() {
            let (addr, _) = line.split_once(": ").unwrap();
            prop_assert_eq!(addr, format!("{:08x}", i * 4));
            prop_assert!(addr.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    /// PROPERTY: text after the separator is the trimmed input line.
    #[test]
    fn property_text_is_trimmed_input(lines in document()) {
        let content: String = lines.iter().map(|l| format!("{l}\n")).collect();
        let out = render(&content);
        let texts: Vec<&str> = out
            .split_terminator('\n')
            .map(|l| l.split_once(": ").unwrap().1)
            .collect();
        let expected: Vec<&str> = lines.iter().map(|l| l.trim()).collect();
        prop_assert_eq!(texts, expected);
    }

    /// PROPERTY: rendering is deterministic.
    #[test]
    fn property_render_is_idempotent(content in "[ -~\n\r\t]{0,200}") {
        prop_assert_eq!(render(&content), render(&content));
    }
}
