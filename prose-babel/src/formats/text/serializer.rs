//! Plain text serialization
//!
//! Layout rules, by document category:
//!
//! | Category        | Output                                                        |
//! |-----------------|---------------------------------------------------------------|
//! | DOCUMENT        | title, blank line, components                                 |
//! | SECTION         | title, newline, components                                    |
//! | LIST            | components                                                    |
//! | ENUMERATED_LIST | title line, items numbered through the nested counter         |
//! | PARAGRAPH       | components joined by spaces, blank line                       |
//! | SENTENCE        | its realisation                                               |
//! | LIST_ITEM       | ` * ` or `<counter> - `, components joined by spaces, newline |
//!
//! Syntactic lists and coordinated phrases that survive orthography inside list items render
//! each child followed by a space; words and literals render their text.

use super::numbering::NestedCounter;
use crate::error::FormatError;
use prose_core::{Category, DocumentCategory, Element, NodePath};

/// Serializes a realised tree to plain text
///
/// Each call owns a fresh counter.
pub fn serialize_to_text(element: &Element) -> Result<String, FormatError> {
    let mut serializer = TextSerializer::new();
    serializer.render(element, &NodePath::root(element))
}

struct TextSerializer {
    counter: NestedCounter,
}

impl TextSerializer {
    fn new() -> Self {
        Self {
            counter: NestedCounter::new(),
        }
    }

    fn render(&mut self, element: &Element, path: &NodePath) -> Result<String, FormatError> {
        let category = match element.category() {
            Category::Document(category) => category,
            _ => return self.render_inline(element, path),
        };

        let output = match category {
            DocumentCategory::Document => {
                let mut out = titled(element, "\n\n");
                out.push_str(&self.concat(element, path)?);
                out
            }
            DocumentCategory::Section => {
                let mut out = titled(element, "\n");
                out.push_str(&self.concat(element, path)?);
                out
            }
            DocumentCategory::List => self.concat(element, path)?,
            DocumentCategory::EnumeratedList => self.render_enumerated(element, path)?,
            DocumentCategory::Paragraph => {
                let mut out = self.rendered(element, path)?.join(" ");
                out.push_str("\n\n");
                out
            }
            DocumentCategory::Sentence => match element.realisation() {
                Some(text) => text.to_string(),
                None => {
                    return Err(FormatError::Malformed {
                        path: path.clone(),
                        reason: "sentence has not been realised".to_string(),
                    })
                }
            },
            DocumentCategory::ListItem => {
                let mut out = match element.parent_category() {
                    Some(Category::Document(DocumentCategory::List)) => " * ".to_string(),
                    Some(Category::Document(DocumentCategory::EnumeratedList)) => {
                        format!("{} - ", self.counter)
                    }
                    _ => String::new(),
                };
                out.push_str(&self.rendered(element, path)?.join(" "));
                out.push('\n');
                out
            }
        };
        Ok(output)
    }

    fn render_enumerated(
        &mut self,
        list: &Element,
        path: &NodePath,
    ) -> Result<String, FormatError> {
        self.counter.descend();
        let mut out = titled(list, "\n");

        for (index, component) in list.components().iter().enumerate() {
            if index > 0 {
                if component.parent_category()
                    == Some(Category::Document(DocumentCategory::EnumeratedList))
                {
                    self.counter.increment();
                }
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push(' ');
                }
            }
            out.push_str(&self.render(component, &path.child(component, index))?);
        }

        self.counter.ascend();
        Ok(out)
    }

    /// Syntactic nodes: each child followed by a space
    fn render_inline(
        &mut self,
        element: &Element,
        path: &NodePath,
    ) -> Result<String, FormatError> {
        if element.is_leaf() {
            return Ok(element.text().to_string());
        }
        let mut out = String::new();
        for part in self.rendered(element, path)? {
            out.push_str(&part);
            out.push(' ');
        }
        Ok(out)
    }

    fn rendered(
        &mut self,
        element: &Element,
        path: &NodePath,
    ) -> Result<Vec<String>, FormatError> {
        element
            .components()
            .iter()
            .enumerate()
            .map(|(index, component)| self.render(component, &path.child(component, index)))
            .collect()
    }

    fn concat(&mut self, element: &Element, path: &NodePath) -> Result<String, FormatError> {
        Ok(self.rendered(element, path)?.concat())
    }
}

fn titled(element: &Element, separator: &str) -> String {
    match element.title() {
        Some(title) => format!("{}{}", title, separator),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prose_core::Orthography;

    fn sentence(text: &str) -> Element {
        Element::sentence(vec![Element::literal(text)])
    }

    fn item(text: &str) -> Element {
        Element::document(DocumentCategory::ListItem, None, vec![sentence(text)])
    }

    fn render(tree: Element) -> String {
        let realised = Orthography::default().realise(tree).unwrap();
        serialize_to_text(&realised).unwrap()
    }

    #[test]
    fn bulleted_list() {
        let list = Element::document(
            DocumentCategory::List,
            None,
            vec![item("first"), item("second")],
        );
        assert_eq!(render(list), " * First.\n * Second.\n");
    }

    #[test]
    fn section_and_paragraphs() {
        let section = Element::document(
            DocumentCategory::Section,
            Some("Intro".into()),
            vec![Element::document(
                DocumentCategory::Paragraph,
                None,
                vec![sentence("one"), sentence("two")],
            )],
        );
        assert_eq!(render(section), "Intro\nOne. Two.\n\n");
    }

    #[test]
    fn titled_enumerated_list() {
        let list = Element::document(
            DocumentCategory::EnumeratedList,
            Some("Steps".into()),
            vec![item("mix"), item("bake")],
        );
        assert_eq!(render(list), "Steps\n1 - Mix.\n2 - Bake.\n");
    }

    #[test]
    fn unrealised_sentence_is_malformed() {
        let doc = Element::document(DocumentCategory::Paragraph, None, vec![sentence("raw")]);
        let err = serialize_to_text(&doc).unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed element at paragraph/sentence[0]: sentence has not been realised"
        );
    }

    #[test]
    fn each_call_numbers_from_one() {
        let list = || {
            Element::document(
                DocumentCategory::EnumeratedList,
                None,
                vec![item("a"), item("b")],
            )
        };
        let first = render(list());
        assert_eq!(first, render(list()));
        assert!(first.starts_with("1 - A."));
    }
}
