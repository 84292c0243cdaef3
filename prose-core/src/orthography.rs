//! Orthography
//!
//!     The orthography stage turns a grammatically realised tree into punctuated text. It
//!     works recursively, one node at a time, and returns a new tree:
//!
//!         - every SENTENCE is collapsed into its final string (capitalised, terminated), and
//!           its components are dropped;
//!         - every LIST_ITEM becomes a list of realised components, so nested lists survive
//!           until formatting;
//!         - the other document nodes keep their structure with realised components;
//!         - syntactic lists and coordinated phrases get their commas and a cached string.
//!
//!     Every produced node reports the category and parent category of the node it replaces,
//!     so formatting can still dispatch on them.
//!
//!     Elided elements contribute no text. Malformed nodes (a leaf carrying a document
//!     category, a document node carrying a non-document one, a flag that is not a boolean
//!     or an unknown discourse function) fail the whole call with the path of the offending
//!     node.
//!
//! Options
//!
//!     [OrthographyOptions] are set once and read for every call. The stage keeps no other
//!     state, so one [Orthography] can serve any number of concurrent requests.

pub mod punctuation;

use crate::element::{
    Category, DiscourseFunction, DocumentCategory, Element, ElementKind, NodePath,
};
use punctuation::{
    capitalise_first_letter, join, remove_punct_space, strip_leading_commas, terminate_sentence,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrthographyOptions {
    /// Separate premodifiers with commas: "a big, red ball"
    pub comma_separate_premodifiers: bool,
    /// Follow cue phrases and front modifiers with a comma: "However, ..."
    pub comma_after_cue_phrase: bool,
}

impl Default for OrthographyOptions {
    fn default() -> Self {
        Self {
            comma_separate_premodifiers: true,
            comma_after_cue_phrase: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrthographyError {
    #[error("malformed element at {path}: {reason}")]
    Malformed { path: NodePath, reason: String },
}

#[derive(Debug, Clone, Default)]
pub struct Orthography {
    options: OrthographyOptions,
}

impl Orthography {
    pub fn new(options: OrthographyOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &OrthographyOptions {
        &self.options
    }

    /// Realises a tree
    pub fn realise(&self, element: Element) -> Result<Element, OrthographyError> {
        let path = NodePath::root(&element);
        self.realise_at(element, &path)
    }

    fn realise_at(&self, element: Element, path: &NodePath) -> Result<Element, OrthographyError> {
        if let Some(reason) = element.malformation() {
            return Err(OrthographyError::Malformed {
                path: path.clone(),
                reason,
            });
        }

        let category = element.category();
        let parent = element.parent_category();
        if element.is_elided() {
            return Ok(silence(element));
        }
        let function = element.dispatch_function();

        let mut realised = match category {
            Category::Document(DocumentCategory::Sentence) => {
                self.realise_sentence(element, path)?
            }
            Category::Document(DocumentCategory::ListItem) => {
                let mut item = element;
                let children = self.realise_components(&mut item, path)?;
                item.kind = ElementKind::List { children };
                item
            }
            Category::Document(_) => {
                let mut node = element;
                let components = self.realise_components(&mut node, path)?;
                node.replace_components(components);
                node
            }
            _ if matches!(element.kind(), ElementKind::List { .. }) => {
                self.realise_list(element, function, path)?
            }
            _ if matches!(element.kind(), ElementKind::Coordinated { .. }) => {
                self.realise_coordinated(element, path)?
            }
            _ => element,
        };

        realised.restamp(category, parent);

        if self.options.comma_after_cue_phrase && function.is_some_and(|f| f.is_cue_like()) {
            let text = realised.text();
            if !text.is_empty() && !text.ends_with(',') {
                let with_comma = format!("{},", text);
                realised.set_realisation(with_comma);
            }
        }

        if let Some(text) = realised.realisation.take() {
            realised.realisation = Some(remove_punct_space(&text));
        }
        Ok(realised)
    }

    /// Realises the components of `element`, leaving it without any
    fn realise_components(
        &self,
        element: &mut Element,
        path: &NodePath,
    ) -> Result<Vec<Element>, OrthographyError> {
        let components = element.take_components();
        let mut realised = Vec::with_capacity(components.len());
        for (index, component) in components.into_iter().enumerate() {
            let child_path = path.child(&component, index);
            realised.push(self.realise_at(component, &child_path)?);
        }
        Ok(realised)
    }

    fn realise_sentence(
        &self,
        mut sentence: Element,
        path: &NodePath,
    ) -> Result<Element, OrthographyError> {
        let interrogative = sentence.features().is_interrogative();
        let components = self.realise_components(&mut sentence, path)?;

        let joined = if components.is_empty() {
            // already collapsed by an earlier pass
            sentence.realisation().unwrap_or_default().to_string()
        } else {
            join(&texts(&components), "")
        };
        let text = capitalise_first_letter(strip_leading_commas(&joined));
        sentence.set_realisation(terminate_sentence(&text, interrogative));
        Ok(sentence)
    }

    fn realise_list(
        &self,
        mut list: Element,
        function: Option<DiscourseFunction>,
        path: &NodePath,
    ) -> Result<Element, OrthographyError> {
        let children = self.realise_components(&mut list, path)?;

        let text = match function {
            Some(DiscourseFunction::PreModifier) => {
                let separator = if self.options.comma_separate_premodifiers {
                    ","
                } else {
                    ""
                };
                let joined = join(&texts(&children), separator);
                if !children.is_empty() && children.iter().all(|c| c.features().is_appositive()) {
                    format!(", {}, ", joined)
                } else {
                    joined
                }
            }
            Some(DiscourseFunction::PostModifier) => {
                let mut out = String::new();
                for child in &children {
                    let text = child.text();
                    if child.features().is_appositive() && !text.is_empty() {
                        out.push_str(", ");
                        out.push_str(text);
                        out.push_str(", ");
                    } else if matches!(child.kind(), ElementKind::List { .. }) || !text.is_empty()
                    {
                        out.push_str(text);
                        out.push(' ');
                    }
                }
                out
            }
            Some(f) if f.is_cue_like() && self.options.comma_after_cue_phrase => {
                join(&texts(&children), ",")
            }
            _ => join(&texts(&children), ""),
        };

        list.replace_components(children);
        list.set_realisation(text);
        Ok(list)
    }

    fn realise_coordinated(
        &self,
        mut phrase: Element,
        path: &NodePath,
    ) -> Result<Element, OrthographyError> {
        let coordinates = phrase.take_components();
        let count = coordinates.len();
        let mut out = String::new();
        let mut realised = Vec::with_capacity(count);

        for (index, coordinate) in coordinates.into_iter().enumerate() {
            // serial comma: only the last conjunction is spelled out
            if index + 2 < count && coordinate.function() == Some(DiscourseFunction::Conjunction) {
                out.push_str(", ");
                realised.push(coordinate);
                continue;
            }
            let child_path = path.child(&coordinate, index);
            let coordinate = self.realise_at(coordinate, &child_path)?;
            let text = coordinate.text();
            if !text.trim().is_empty() {
                out.push_str(text);
                out.push(' ');
            }
            realised.push(coordinate);
        }

        if out.ends_with(' ') {
            out.pop();
        }
        phrase.replace_components(realised);
        phrase.set_realisation(out.replace(" ,", ","));
        Ok(phrase)
    }
}

fn texts(elements: &[Element]) -> Vec<&str> {
    elements.iter().map(Element::text).collect()
}

/// An elided element: same kind and category, no components, empty text
fn silence(mut element: Element) -> Element {
    element.take_components();
    element.set_realisation("");
    element
}

/// The text of a realised tree without any document layout
///
/// Used when a pipeline has no formatter: node texts are joined with single spaces.
pub fn plain_text(element: &Element) -> String {
    if element.realisation().is_some() || element.is_leaf() {
        return element.text().to_string();
    }
    let parts: Vec<String> = element.components().iter().map(plain_text).collect();
    join(&parts, "")
}
