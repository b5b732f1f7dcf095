//! Property tests for the classification contract

use kodegen_tools_langdetect::context::{DetectionContext, char_prefix};
use kodegen_tools_langdetect::{guess_language, is_known_language};
use proptest::prelude::*;

mod common;

/// Arbitrary text biased towards code-like characters
fn code_like() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "[a-z{}();:=<>$#@!\"' \n\t.,-]{0,200}",
        prop::sample::select(
            common::KNOWN_SNIPPETS
                .iter()
                .map(|(code, _)| (*code).to_string())
                .collect::<Vec<_>>()
        ),
    ]
}

proptest! {
    #[test]
    fn prop_never_panics_and_labels_are_known(code in code_like()) {
        if let Some(label) = guess_language(&code) {
            prop_assert!(is_known_language(label));
        }
    }

    #[test]
    fn prop_deterministic(code in code_like()) {
        prop_assert_eq!(guess_language(&code), guess_language(&code));
    }

    #[test]
    fn prop_trim_invariant(code in code_like(), lead in "[ \t\n]{0,5}", trail in "[ \t\n]{0,5}") {
        let padded = format!("{lead}{code}{trail}");
        prop_assert_eq!(guess_language(&padded), guess_language(code.trim()));
    }

    #[test]
    fn prop_whitespace_is_none(ws in "[ \t\r\n]{0,40}") {
        prop_assert_eq!(guess_language(&ws), None);
    }

    #[test]
    fn prop_sample_respects_cap(code in any::<String>(), limit in 1usize..64) {
        let ctx = DetectionContext::with_sample_limit(&code, limit);
        prop_assert!(ctx.sample.chars().count() <= limit);
        prop_assert!(!ctx.lines.is_empty());
        prop_assert_eq!(ctx.sample, char_prefix(code.trim(), limit));
    }
}
