//! Aggregated clauses realised through the pipeline

use prose_core::aggregation::{Aggregator, LemmaPolicy};
use prose_core::{DiscourseFunction, Element, LexicalCategory, PhraseCategory, Pipeline};
use rstest::rstest;

fn noun_phrase(words: &[&str], function: DiscourseFunction) -> Element {
    Element::list(
        PhraseCategory::NounPhrase,
        words
            .iter()
            .map(|w| Element::word(*w, LexicalCategory::Noun))
            .collect(),
    )
    .with_function(function)
}

fn clause(subject: &str, verb: (&str, &str), object: &[&str]) -> Element {
    Element::list(
        PhraseCategory::Clause,
        vec![
            noun_phrase(&[subject], DiscourseFunction::Subject),
            Element::list(
                PhraseCategory::VerbPhrase,
                vec![
                    Element::word_form(verb.0, verb.1, LexicalCategory::Verb)
                        .with_function(DiscourseFunction::Head),
                    noun_phrase(object, DiscourseFunction::Object),
                ],
            ),
        ],
    )
}

fn realise_pair(first: Element, second: Element, policy: LemmaPolicy) -> Vec<String> {
    let pipeline = Pipeline::new();
    Aggregator::standard(policy)
        .aggregate(vec![first, second])
        .into_iter()
        .filter_map(|element| pipeline.realise_sentence(element))
        .collect()
}

#[rstest]
#[case::shared_subject(
    clause("John", ("eat", "ate"), &["an", "apple"]),
    clause("John", ("drink", "drank"), &["water"]),
    "John ate an apple and drank water."
)]
#[case::shared_object(
    clause("John", ("buy", "bought"), &["the", "car"]),
    clause("Mary", ("sell", "sold"), &["the", "car"]),
    "John bought and Mary sold the car."
)]
fn base_form_policy_merges(
    #[case] first: Element,
    #[case] second: Element,
    #[case] expected: &str,
) {
    assert_eq!(
        realise_pair(first, second, LemmaPolicy::BaseForm),
        vec![expected.to_string()]
    );
}

#[test]
fn default_policy_leaves_clauses_apart() {
    let out = realise_pair(
        clause("John", ("eat", "ate"), &["an", "apple"]),
        clause("John", ("drink", "drank"), &["water"]),
        LemmaPolicy::default(),
    );
    assert_eq!(out, vec!["John ate an apple.", "John drank water."]);
}

#[test]
fn mismatched_clauses_stay_apart() {
    let passive = clause("John", ("eat", "eaten"), &["apples"]).passive();
    let out = realise_pair(
        clause("John", ("eat", "ate"), &["an", "apple"]),
        passive,
        LemmaPolicy::BaseForm,
    );
    assert_eq!(out.len(), 2);
}
