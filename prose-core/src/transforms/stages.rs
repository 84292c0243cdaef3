//! Built-in element stages
//!
//! The pipeline's syntax and morphology slots belong to external realisers. These stages fill
//! them when nothing else is plugged in.

use crate::element::{DiscourseFunction, Element, ElementKind, LexicalCategory};
use crate::transforms::{Runnable, TransformError};

/// Minimal syntax realisation: spells out coordinating conjunctions
///
/// Every coordinated phrase with two or more coordinates and no CONJUNCTION-tagged coordinate
/// gets its conjunction word inserted between each pair of coordinates. Phrases that already
/// carry conjunction coordinates are left as they are, so the stage is idempotent.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinationSyntax;

impl CoordinationSyntax {
    pub fn new() -> Self {
        CoordinationSyntax
    }
}

fn interleave(mut element: Element) -> Element {
    let components: Vec<Element> = element
        .take_components()
        .into_iter()
        .map(interleave)
        .collect();

    let conjunction = match element.kind() {
        ElementKind::Coordinated { conjunction, .. } => Some(conjunction.clone()),
        _ => None,
    };
    let already_spelled = components
        .iter()
        .any(|c| c.function() == Some(DiscourseFunction::Conjunction));

    let components = match conjunction {
        Some(conjunction) if components.len() > 1 && !already_spelled => {
            let mut spelled = Vec::with_capacity(components.len() * 2 - 1);
            for (index, coordinate) in components.into_iter().enumerate() {
                if index > 0 {
                    spelled.push(
                        Element::word(conjunction.as_str(), LexicalCategory::Conjunction)
                            .with_function(DiscourseFunction::Conjunction),
                    );
                }
                spelled.push(coordinate);
            }
            spelled
        }
        _ => components,
    };

    element.replace_components(components);
    element
}

impl Runnable<Element, Element> for CoordinationSyntax {
    fn run(&self, input: Element) -> Result<Element, TransformError> {
        Ok(interleave(input))
    }
}

/// Passes elements through unchanged; the default morphology stage
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Runnable<Element, Element> for Identity {
    fn run(&self, input: Element) -> Result<Element, TransformError> {
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::PhraseCategory;

    fn coordinated(items: &[&str]) -> Element {
        Element::coordinated(
            PhraseCategory::NounPhrase,
            items.iter().map(|i| Element::literal(*i)).collect(),
            "and",
        )
    }

    fn texts(element: &Element) -> Vec<&str> {
        element.components().iter().map(Element::text).collect()
    }

    #[test]
    fn conjunctions_are_interleaved() {
        let out = CoordinationSyntax::new()
            .run(coordinated(&["A", "B", "C"]))
            .unwrap();
        assert_eq!(texts(&out), vec!["A", "and", "B", "and", "C"]);
        assert_eq!(
            out.components()[1].function(),
            Some(DiscourseFunction::Conjunction)
        );
    }

    #[test]
    fn interleaving_is_idempotent() {
        let syntax = CoordinationSyntax::new();
        let once = syntax.run(coordinated(&["A", "B"])).unwrap();
        let out = Identity.run(syntax.run(once).unwrap()).unwrap();
        assert_eq!(texts(&out), vec!["A", "and", "B"]);
    }

    #[test]
    fn nested_phrases_are_reached() {
        let sentence = Element::sentence(vec![coordinated(&["tea", "coffee"])]);
        let out = CoordinationSyntax::new().run(sentence).unwrap();
        assert_eq!(texts(&out.components()[0]), vec!["tea", "and", "coffee"]);
    }

    #[test]
    fn single_coordinate_is_untouched() {
        let out = CoordinationSyntax::new().run(coordinated(&["A"])).unwrap();
        assert_eq!(texts(&out), vec!["A"]);
    }
}
