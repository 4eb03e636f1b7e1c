//! Property tests for line splitting.

use proptest::prelude::*;

use hexlist::domain::services::split_lines;

fn terminator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("\n"), Just("\r\n"), Just("\r")]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every terminated line comes back, whatever the terminator.
    ///
    /// Lines are non-empty: a `\r` followed by an empty `\n` line reads as `\r\n`.
    #[test]
    fn property_mixed_terminators_round_trip(
        lines in proptest::collection::vec(("[a-f0-9 ]{1,12}", terminator()), 0..32)
    ) {
        let content: String = lines.iter().map(|(l, t)| format!("{l}{t}")).collect();
        let split: Vec<&str> = split_lines(&content).collect();
        let expected: Vec<&str> = lines.iter().map(|(l, _)| l.as_str()).collect();
        prop_assert_eq!(split, expected);
    }

    /// PROPERTY: split lines never contain terminators.
    #[test]
    fn property_no_terminators_inside_lines(content in "[ -~\n\r]{0,200}") {
        for line in split_lines(&content) {
            prop_assert!(!line.contains('\n') && !line.contains('\r'));
        }
    }
}
