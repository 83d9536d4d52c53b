use patgrep::matcher::{self, wildcard, MatchMode, MatchOptions};
use proptest::prelude::*;

fn any_mode() -> impl Strategy<Value = MatchMode> {
    prop_oneof![
        Just(MatchMode::Substring),
        Just(MatchMode::Wildcard),
        Just(MatchMode::Anchored),
    ]
}

proptest! {
    #[test]
    fn test_literal_wildcard_equals_substring_search(
        text in "[abc]{0,24}",
        pattern in "[abc]{0,6}",
    ) {
        prop_assert_eq!(
            wildcard::is_match(text.as_bytes(), pattern.as_bytes()),
            text.contains(&pattern)
        );
    }

    #[test]
    fn test_lone_star_matches_any_text(text in "[ -~]{0,40}") {
        prop_assert!(wildcard::is_match(text.as_bytes(), b"*"));
    }

    #[test]
    fn test_lone_question_requires_nonempty_text(text in "[ -~]{0,40}") {
        prop_assert_eq!(wildcard::is_match(text.as_bytes(), b"?"), !text.is_empty());
    }

    #[test]
    fn test_invert_is_an_exact_complement(
        text in "[abC]{0,24}",
        pattern in "[abC*?^$]{0,6}",
        mode in any_mode(),
        ignore_case in any::<bool>(),
    ) {
        let line = format!("{text}\n");
        let plain = MatchOptions { ignore_case, invert: false };
        let inverted = MatchOptions { ignore_case, invert: true };
        prop_assert_ne!(
            matcher::line_matches(line.as_bytes(), pattern.as_bytes(), mode, plain),
            matcher::line_matches(line.as_bytes(), pattern.as_bytes(), mode, inverted)
        );
    }

    #[test]
    fn test_case_folding_makes_text_case_irrelevant(
        text in "[a-z ]{0,24}",
        pattern in "[a-z*?]{0,6}",
        mode in any_mode(),
    ) {
        let opts = MatchOptions { ignore_case: true, invert: false };
        let upper = text.to_ascii_uppercase();
        prop_assert_eq!(
            matcher::line_matches(text.as_bytes(), pattern.as_bytes(), mode, opts),
            matcher::line_matches(upper.as_bytes(), pattern.as_bytes(), mode, opts)
        );
    }
}
