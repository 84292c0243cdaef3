//! Node paths
//!
//! A [NodePath] names a node by the chain of category labels and component indexes leading
//! to it, e.g. `document/paragraph[0]/list[1]/list_item[0]`. Errors raised while walking a
//! tree carry one so the offending node can be found.

use super::Element;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodePath {
    steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    label: &'static str,
    index: Option<usize>,
}

impl NodePath {
    /// The path of a tree root
    pub fn root(element: &Element) -> Self {
        Self {
            steps: vec![Step {
                label: element.category().as_str(),
                index: None,
            }],
        }
    }

    /// The path of the `index`th component of the node at `self`
    pub fn child(&self, element: &Element, index: usize) -> Self {
        let mut steps = self.steps.clone();
        steps.push(Step {
            label: element.category().as_str(),
            index: Some(index),
        });
        Self { steps }
    }

    pub fn depth(&self) -> usize {
        self.steps.len()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            match step.index {
                Some(index) => write!(f, "{}[{}]", step.label, index)?,
                None => f.write_str(step.label)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::DocumentCategory;

    #[test]
    fn displays_labels_and_indexes() {
        let doc = Element::document(DocumentCategory::Document, None, vec![]);
        let para = Element::document(DocumentCategory::Paragraph, None, vec![]);
        let sentence = Element::document(DocumentCategory::Sentence, None, vec![]);

        let path = NodePath::root(&doc).child(&para, 0).child(&sentence, 2);
        assert_eq!(path.to_string(), "document/paragraph[0]/sentence[2]");
        assert_eq!(path.depth(), 3);
    }
}
