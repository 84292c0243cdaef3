//! Configured realisation from tree to formatted string

use prose::{
    load_defaults, DiscourseFunction, DocumentCategory, Element, LexicalCategory, Loader,
    PhraseCategory, Realiser,
};
use prose_core::aggregation::LemmaPolicy;
use rstest::rstest;

fn sentence(text: &str) -> Element {
    Element::sentence(vec![Element::literal(text)])
}

fn item(text: &str) -> Element {
    Element::document(DocumentCategory::ListItem, None, vec![sentence(text)])
}

fn document(body: Element) -> Element {
    Element::document(
        DocumentCategory::Document,
        Some("Document".into()),
        vec![Element::document(DocumentCategory::Paragraph, None, vec![body])],
    )
}

fn realiser(format: &str) -> Realiser {
    let config = Loader::new()
        .set_override("formatting.default_format", format)
        .unwrap()
        .build()
        .unwrap();
    Realiser::from_config(&config).unwrap()
}

fn bulleted() -> Element {
    document(Element::document(
        DocumentCategory::List,
        None,
        vec![
            item("this is the first sentence"),
            item("this is the second sentence"),
        ],
    ))
}

#[rstest]
#[case::html(
    "html",
    "<h1>Document</h1><p><ul><li>This is the first sentence.</li>\
     <li>This is the second sentence.</li></ul></p>"
)]
#[case::text(
    "text",
    "Document\n\n * This is the first sentence.\n * This is the second sentence.\n\n\n"
)]
fn renderers_share_one_tree(#[case] format: &str, #[case] expected: &str) {
    assert_eq!(realiser(format).realise(bulleted()).unwrap().text, expected);
}

#[test]
fn nested_numbering_through_the_realiser() {
    let enumerated = |components| {
        Element::document(DocumentCategory::EnumeratedList, None, components)
    };
    let doc = document(enumerated(vec![
        enumerated(vec![
            item("this is sub-list sentence 1"),
            item("this is sub-list sentence 2"),
        ]),
        item("this is the first sentence"),
        item("this is the second sentence"),
    ]));

    let realiser = Realiser::from_config(&load_defaults().unwrap()).unwrap();
    assert_eq!(
        realiser.realise(doc).unwrap().text,
        "Document\n\n\
         1.1 - This is sub-list sentence 1.\n\
         1.2 - This is sub-list sentence 2.\n\
         2 - This is the first sentence.\n\
         3 - This is the second sentence.\n\
         \n\n"
    );
}

#[test]
fn debug_trace_leaves_the_text_alone() {
    let quiet = realiser("text").realise(bulleted()).unwrap();
    let config = Loader::new()
        .set_override("pipeline.debug", true)
        .unwrap()
        .build()
        .unwrap();
    let traced = Realiser::from_config(&config)
        .unwrap()
        .realise(bulleted())
        .unwrap();

    assert!(quiet.trace.is_empty());
    assert_eq!(traced.text, quiet.text);
    let stages: Vec<&str> = traced.trace.iter().map(|t| t.stage).collect();
    assert_eq!(stages, ["syntax", "morphology", "orthography", "formatting"]);
}

fn clause(subject: &str, verb: (&str, &str), object: &str) -> Element {
    let noun_phrase = |word: &str, function| {
        Element::list(
            PhraseCategory::NounPhrase,
            vec![Element::word(word, LexicalCategory::Noun)],
        )
        .with_function(function)
    };
    Element::list(
        PhraseCategory::Clause,
        vec![
            noun_phrase(subject, DiscourseFunction::Subject),
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

#[test]
fn configured_aggregation_merges_shared_subjects() {
    let config = Loader::new()
        .set_override("aggregation.lemma_policy", "base-form")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.aggregation.lemma_policy, LemmaPolicy::BaseForm);
    let realiser = Realiser::from_config(&config).unwrap();

    let merged = realiser.aggregate(vec![
        clause("Kim", ("sing", "sang"), "songs"),
        clause("Kim", ("play", "played"), "guitar"),
    ]);
    assert_eq!(merged.len(), 1);

    let text = realiser.realise_sentence(merged.into_iter().next().unwrap());
    assert_eq!(text.as_deref(), Some("Kim sang songs and played guitar."));
}
