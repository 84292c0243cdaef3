//! Constituent pairings

use super::flatten::{flatten, ComponentPath};
use crate::element::{Category, DiscourseFunction, Element};
use serde::{Deserialize, Serialize};

/// Which side of the verb a constituent sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Periphery {
    Left,
    Right,
}

/// How head lexemes are compared when deciding whether two constituents are lemma-identical
///
/// `Never` keeps the historical behaviour where no two constituents are ever considered
/// lemma-identical, which leaves the conjunction reduction rules inert. `BaseForm` compares
/// the base forms of every leaf, ignoring inflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LemmaPolicy {
    #[default]
    Never,
    BaseForm,
}

/// One paired constituent: the index of its tree and its path inside that tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub tree: usize,
    pub path: ComponentPath,
}

/// Constituents at the same flattened position of parallel trees
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pub function: Option<DiscourseFunction>,
    pub category: Category,
    pub periphery: Periphery,
    pub members: Vec<Member>,
}

/// Pairs the flattened constituents of two trees
///
/// Returns nothing when the sequences differ in length or when any position disagrees on
/// category or discourse function.
pub fn pair_constituents(first: &Element, second: &Element) -> Vec<Pairing> {
    let left: Vec<_> = flatten(first).collect();
    let right: Vec<_> = flatten(second).collect();
    if left.len() != right.len() {
        tracing::trace!(
            left = left.len(),
            right = right.len(),
            "constituent counts differ"
        );
        return Vec::new();
    }

    let mut periphery = Periphery::Left;
    let mut pairings = Vec::with_capacity(left.len());
    for (position, ((left_path, a), (right_path, b))) in
        left.into_iter().zip(right).enumerate()
    {
        if a.category() != b.category() || a.function() != b.function() {
            tracing::trace!(position, "constituents disagree; pairing abandoned");
            return Vec::new();
        }
        if a.category().is_verb() {
            periphery = Periphery::Right;
        }
        pairings.push(Pairing {
            function: a.function(),
            category: a.category(),
            periphery,
            members: vec![
                Member {
                    tree: 0,
                    path: left_path,
                },
                Member {
                    tree: 1,
                    path: right_path,
                },
            ],
        });
    }
    pairings
}

impl Pairing {
    fn resolve<'a>(&self, trees: &[&'a Element]) -> Option<Vec<&'a Element>> {
        self.members
            .iter()
            .map(|member| trees.get(member.tree).copied()?.component_at(&member.path))
            .collect()
    }

    /// True if every member is structurally equal to the first
    pub fn form_identical(&self, trees: &[&Element]) -> bool {
        match self.resolve(trees) {
            Some(members) => members.windows(2).all(|pair| pair[0] == pair[1]),
            None => false,
        }
    }

    /// True if every member has the same lexemes as the first, under `policy`
    pub fn lemma_identical(&self, trees: &[&Element], policy: LemmaPolicy) -> bool {
        match policy {
            LemmaPolicy::Never => false,
            LemmaPolicy::BaseForm => match self.resolve(trees) {
                Some(members) => {
                    let lemmas: Vec<_> = members.iter().map(|m| m.leaf_base_forms()).collect();
                    !lemmas[0].is_empty() && lemmas.windows(2).all(|pair| pair[0] == pair[1])
                }
                None => false,
            },
        }
    }

    /// Elides every member except the rightmost
    pub fn elide_leftmost(&self, trees: &mut [Element]) {
        if let Some((_, rest)) = self.members.split_last() {
            elide(rest, trees);
        }
    }

    /// Elides every member except the leftmost
    pub fn elide_rightmost(&self, trees: &mut [Element]) {
        if let Some((_, rest)) = self.members.split_first() {
            elide(rest, trees);
        }
    }
}

fn elide(members: &[Member], trees: &mut [Element]) {
    for member in members {
        if let Some(target) = trees
            .get_mut(member.tree)
            .and_then(|tree| tree.component_at_mut(&member.path))
        {
            target.elide_leaves();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{LexicalCategory, PhraseCategory};

    fn word(base: &str, category: LexicalCategory, function: DiscourseFunction) -> Element {
        Element::word(base, category).with_function(function)
    }

    fn clause(subject: &str, verb: (&str, &str), object: Element) -> Element {
        Element::list(
            PhraseCategory::Clause,
            vec![
                word(subject, LexicalCategory::Noun, DiscourseFunction::Subject),
                Element::list(
                    PhraseCategory::VerbPhrase,
                    vec![
                        Element::word_form(verb.0, verb.1, LexicalCategory::Verb)
                            .with_function(DiscourseFunction::Head),
                        object,
                    ],
                ),
            ],
        )
    }

    fn object(words: &[&str]) -> Element {
        Element::list(
            PhraseCategory::NounPhrase,
            words
                .iter()
                .map(|w| Element::word(*w, LexicalCategory::Noun))
                .collect(),
        )
        .with_function(DiscourseFunction::Object)
    }

    #[test]
    fn pairs_positions_with_periphery() {
        let a = clause("john", ("eat", "ate"), object(&["an", "apple"]));
        let b = clause("john", ("drink", "drank"), object(&["water"]));

        let pairings = pair_constituents(&a, &b);
        let peripheries: Vec<_> = pairings.iter().map(|p| p.periphery).collect();
        assert_eq!(
            peripheries,
            vec![Periphery::Left, Periphery::Right, Periphery::Right]
        );
        assert_eq!(pairings[2].members[1].path, vec![1, 1]);
        assert_eq!(pairings[0].function, Some(DiscourseFunction::Subject));
    }

    #[test]
    fn unequal_lengths_pair_nothing() {
        let a = clause("john", ("eat", "ate"), object(&["apple"]));
        let b = Element::list(
            PhraseCategory::Clause,
            vec![word("john", LexicalCategory::Noun, DiscourseFunction::Subject)],
        );
        assert!(pair_constituents(&a, &b).is_empty());
    }

    #[test]
    fn one_mismatch_abandons_every_pairing() {
        let a = clause("john", ("eat", "ate"), object(&["apple"]));
        let b = clause(
            "john",
            ("eat", "ate"),
            word("quickly", LexicalCategory::Adverb, DiscourseFunction::PostModifier),
        );
        assert!(pair_constituents(&a, &b).is_empty());
    }

    #[test]
    fn identity_checks() {
        let a = clause("john", ("eat", "ate"), object(&["apple"]));
        let b = clause("john", ("eat", "eats"), object(&["apple"]));
        let pairings = pair_constituents(&a, &b);
        let trees = [&a, &b];

        assert!(pairings[0].form_identical(&trees));
        assert!(!pairings[1].form_identical(&trees));
        assert!(pairings[1].lemma_identical(&trees, LemmaPolicy::BaseForm));
        assert!(!pairings[0].lemma_identical(&trees, LemmaPolicy::Never));
    }

    #[test]
    fn elision_reaches_nested_leaves() {
        let nested = Element::list(
            PhraseCategory::NounPhrase,
            vec![
                Element::word("the", LexicalCategory::Determiner),
                Element::list(
                    PhraseCategory::NounPhrase,
                    vec![
                        Element::word("old", LexicalCategory::Adjective),
                        Element::word("car", LexicalCategory::Noun),
                    ],
                ),
            ],
        )
        .with_function(DiscourseFunction::Object);
        let a = clause("john", ("buy", "bought"), nested.clone());
        let b = clause("mary", ("sell", "sold"), nested);

        let pairings = pair_constituents(&a, &b);
        let mut trees = vec![a.clone(), b.clone()];
        pairings[2].elide_leftmost(&mut trees);

        let elided = trees[0].component_at(&[1, 1]).unwrap();
        assert!(elided.components()[0].is_elided());
        assert!(elided.component_at(&[1, 0]).unwrap().is_elided());
        assert!(elided.component_at(&[1, 1]).unwrap().is_elided());
        assert_eq!(trees[1], b);

        let mut trees = vec![a.clone(), b];
        pairings[0].elide_rightmost(&mut trees);
        assert_eq!(trees[0], a);
        assert!(trees[1].components()[0].is_elided());
    }
}
