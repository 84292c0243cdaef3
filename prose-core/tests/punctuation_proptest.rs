//! Property tests for the string-level punctuation rules

use prose_core::orthography::punctuation::{
    capitalise_first_letter, join, remove_punct_space, terminate_sentence,
};
use proptest::prelude::*;

fn fragment() -> impl Strategy<Value = String> {
    "[a-z ,.?]{0,24}"
}

proptest! {
    #[test]
    fn comma_cleanup_is_a_fixed_point(text in fragment()) {
        let once = remove_punct_space(&text);
        let twice = remove_punct_space(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert!(!once.contains(" ,"));
        prop_assert!(!once.contains(",,"));
    }

    #[test]
    fn termination_is_idempotent(text in fragment(), interrogative in any::<bool>()) {
        let once = terminate_sentence(&text, interrogative);
        prop_assert_eq!(terminate_sentence(&once, interrogative), once.clone());
        prop_assert_eq!(terminate_sentence(&once, !interrogative), once.clone());
        if !text.is_empty() {
            prop_assert!(once.ends_with('.') || once.ends_with('?'));
        }
    }

    #[test]
    fn capitalisation_changes_at_most_the_first_character(text in fragment()) {
        let capitalised = capitalise_first_letter(&text);
        prop_assert_eq!(capitalised.len(), text.len());
        prop_assert_eq!(&capitalised[1.min(text.len())..], &text[1.min(text.len())..]);
    }

    #[test]
    fn joining_never_leaves_blank_items(items in prop::collection::vec(fragment(), 0..6)) {
        let joined = join(&items, ",");
        prop_assert!(!joined.ends_with(' '));
        let survivors = items.iter().filter(|i| !i.trim().is_empty()).count();
        if survivors == 0 {
            prop_assert_eq!(joined, "");
        }
    }
}
