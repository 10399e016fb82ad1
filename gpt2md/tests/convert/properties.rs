//! Properties that hold for arbitrary input, not just renderer output.

use gpt2md::convert::{decode_entities, normalize_whitespace};
use gpt2md::html_to_markdown;
use proptest::prelude::*;

proptest! {
    #[test]
    fn conversion_output_is_always_trimmed(html in ".{0,400}") {
        let out = html_to_markdown(&html);
        prop_assert_eq!(out.trim(), out.as_str());
    }

    #[test]
    fn conversion_leaves_no_blank_line_runs(html in "[A-Za-z<>/ \n|-]{0,300}") {
        let out = html_to_markdown(&html);
        prop_assert!(!out.contains("\n\n\n"));
    }

    #[test]
    fn entity_decoding_only_touches_ampersand_sequences(text in "[^&]{0,200}") {
        prop_assert_eq!(decode_entities(&text), text);
    }

    #[test]
    fn whitespace_normalization_is_idempotent(text in "[a-z \n-]{0,200}") {
        let once = normalize_whitespace(&text);
        let twice = normalize_whitespace(&once);
        prop_assert_eq!(twice, once);
    }
}
