//! String-level punctuation rules
//!
//! These work on already realised text and know nothing about trees.

use once_cell::sync::Lazy;
use regex::Regex;

static SPACE_BEFORE_COMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" +,").expect("Invalid space-before-comma regex"));

static COMMA_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",{2,}").expect("Invalid comma-run regex"));

/// Drops any leading run of spaces and commas
pub fn strip_leading_commas(text: &str) -> &str {
    text.trim_start_matches([' ', ','])
}

/// Upper-cases the first character if it is an ASCII lowercase letter
///
/// Only position 0 is inspected: "1994 was a year" stays as it is.
pub fn capitalise_first_letter(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {
            let mut out = String::with_capacity(text.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        _ => text.to_string(),
    }
}

/// Appends `?` or `.` unless the text already ends in one of them
///
/// Empty text stays empty.
pub fn terminate_sentence(text: &str, interrogative: bool) -> String {
    if text.is_empty() || text.ends_with(['.', '?']) {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + 1);
    out.push_str(text);
    out.push(if interrogative { '?' } else { '.' });
    out
}

/// Removes spaces before commas, then collapses runs of commas
pub fn remove_punct_space(text: &str) -> String {
    let tightened = SPACE_BEFORE_COMMA.replace_all(text, ",");
    COMMA_RUN.replace_all(&tightened, ",").into_owned()
}

/// Joins realised texts with `separator` and a single space after each item
///
/// Blank items are skipped and each item loses its trailing whitespace first, so the
/// separator always sits directly against the text it follows.
pub fn join<S: AsRef<str>>(items: &[S], separator: &str) -> String {
    let glue = format!("{} ", separator);
    items
        .iter()
        .map(|item| item.as_ref().trim_end())
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join(&glue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("the dog", "The dog")]
    #[case("1994 was a year", "1994 was a year")]
    #[case("Already", "Already")]
    #[case("élan", "élan")]
    #[case("", "")]
    fn capitalisation_only_looks_at_the_first_character(
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(capitalise_first_letter(input), expected);
    }

    #[rstest]
    #[case("It rains", false, "It rains.")]
    #[case("Does it rain", true, "Does it rain?")]
    #[case("It rains.", true, "It rains.")]
    #[case("Does it?", false, "Does it?")]
    #[case("", false, "")]
    fn termination(#[case] input: &str, #[case] interrogative: bool, #[case] expected: &str) {
        assert_eq!(terminate_sentence(input, interrogative), expected);
    }

    #[rstest]
    #[case(" , ,", ",")]
    #[case("A , B", "A, B")]
    #[case("x,,, y", "x, y")]
    #[case("no commas", "no commas")]
    fn comma_cleanup(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(remove_punct_space(input), expected);
    }

    #[test]
    fn strips_leading_spaces_and_commas() {
        assert_eq!(strip_leading_commas(" , ,then"), "then");
        assert_eq!(strip_leading_commas("then, "), "then, ");
    }

    #[rstest]
    #[case(&["a", "b", "c"], "", "a b c")]
    #[case(&["a", "b", "c"], ",", "a, b, c")]
    #[case(&["a", "", "  ", "b"], ",", "a, b")]
    #[case(&["a ", "b"], "", "a b")]
    #[case(&["my friend, ", "left"], "", "my friend, left")]
    #[case(&[], ",", "")]
    fn joining(#[case] items: &[&str], #[case] separator: &str, #[case] expected: &str) {
        assert_eq!(join(items, separator), expected);
    }
}
