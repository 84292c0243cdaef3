//! HTML serialization
//!
//! Builds an RcDom tree from the realised element tree, then serializes the children of a
//! container `div` without the container itself. The output is a fragment, not a page.
//!
//! | Category        | Markup                                        |
//! |-----------------|-----------------------------------------------|
//! | DOCUMENT        | `<h1>` title, then components                 |
//! | SECTION         | `<h2>` title, then components                 |
//! | LIST            | `<ul>`                                        |
//! | ENUMERATED_LIST | `<h3>` title if any, then `<ol>`              |
//! | PARAGRAPH       | `<p>`, components separated by spaces         |
//! | SENTENCE        | its realisation as a text node                |
//! | LIST_ITEM       | `<li>`, components separated by spaces        |
//!
//! Numbering is left to the browser, so no counter is kept.

use crate::error::FormatError;
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use prose_core::{Category, DocumentCategory, Element, NodePath};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Serializes a realised tree to an HTML fragment
pub fn serialize_to_html(element: &Element) -> Result<String, FormatError> {
    let dom = build_html_dom(element)?;
    serialize_dom(&dom)
}

fn build_html_dom(element: &Element) -> Result<RcDom, FormatError> {
    let dom = RcDom::default();
    let container = create_element("div", vec![]);
    append(&container, element, &NodePath::root(element))?;
    dom.document.children.borrow_mut().push(container);
    Ok(dom)
}

fn append(parent: &Handle, element: &Element, path: &NodePath) -> Result<(), FormatError> {
    let category = match element.category() {
        Category::Document(category) => category,
        _ => {
            push(parent, create_text(&inline_text(element)));
            return Ok(());
        }
    };

    match category {
        DocumentCategory::Document => {
            append_title(parent, element, "h1");
            append_children(parent, element, path, "")?;
        }
        DocumentCategory::Section => {
            append_title(parent, element, "h2");
            append_children(parent, element, path, "")?;
        }
        DocumentCategory::List => {
            let list = push(parent, create_element("ul", vec![]));
            append_children(&list, element, path, "")?;
        }
        DocumentCategory::EnumeratedList => {
            append_title(parent, element, "h3");
            let list = push(parent, create_element("ol", vec![]));
            append_children(&list, element, path, "")?;
        }
        DocumentCategory::Paragraph => {
            if !element.components().is_empty() {
                let para = push(parent, create_element("p", vec![]));
                append_children(&para, element, path, " ")?;
            }
        }
        DocumentCategory::Sentence => match element.realisation() {
            Some(text) => {
                push(parent, create_text(text));
            }
            None => {
                return Err(FormatError::Malformed {
                    path: path.clone(),
                    reason: "sentence has not been realised".to_string(),
                })
            }
        },
        DocumentCategory::ListItem => {
            let item = push(parent, create_element("li", vec![]));
            append_children(&item, element, path, " ")?;
        }
    }
    Ok(())
}

fn append_children(
    parent: &Handle,
    element: &Element,
    path: &NodePath,
    separator: &str,
) -> Result<(), FormatError> {
    for (index, component) in element.components().iter().enumerate() {
        if index > 0 && !separator.is_empty() {
            push(parent, create_text(separator));
        }
        append(parent, component, &path.child(component, index))?;
    }
    Ok(())
}

fn append_title(parent: &Handle, element: &Element, tag: &str) {
    if let Some(title) = element.title() {
        let heading = push(parent, create_element(tag, vec![]));
        push(&heading, create_text(title));
    }
}

/// Words and literals give their text; syntactic lists give each child followed by a space
fn inline_text(element: &Element) -> String {
    if element.is_leaf() {
        return element.text().to_string();
    }
    element
        .components()
        .iter()
        .map(|child| format!("{} ", inline_text(child)))
        .collect()
}

fn push(parent: &Handle, child: Handle) -> Handle {
    parent.children.borrow_mut().push(child.clone());
    child
}

fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Serializes the children of the container, leaving the container out
fn serialize_dom(dom: &RcDom) -> Result<String, FormatError> {
    let mut output = Vec::new();

    let container = dom
        .document
        .children
        .borrow()
        .first()
        .ok_or_else(|| FormatError::SerializationError("empty document".to_string()))?
        .clone();

    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for child in container.children.borrow().iter() {
        let serializable = SerializableHandle::from(child.clone());
        serialize(&mut output, &serializable, opts.clone())
            .map_err(|e| FormatError::SerializationError(format!("html: {}", e)))?;
    }

    String::from_utf8(output)
        .map_err(|e| FormatError::SerializationError(format!("utf-8: {}", e)))
}
