//! Element snapshots
//!
//! A normalized, format-agnostic view of an element tree. Dump formats consume the snapshot
//! instead of walking elements themselves, so traversal lives in exactly one place.

use super::{Element, ElementKind, FeatureValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSnapshot {
    /// Element kind ("Word", "List", "Document", ...)
    pub node_type: String,

    /// One-line description of the node
    pub label: String,

    /// Category, features and realisation, stringified
    pub attributes: BTreeMap<String, String>,

    pub children: Vec<ElementSnapshot>,
}

impl ElementSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<ElementSnapshot>) -> Self {
        self.children.extend(children);
        self
    }
}

fn label_for(element: &Element) -> String {
    match element.kind() {
        ElementKind::Word { .. } | ElementKind::StringLiteral { .. } => element.text().to_string(),
        ElementKind::List { children } => {
            format!("{} ({} items)", element.category(), children.len())
        }
        ElementKind::Coordinated {
            coordinates,
            conjunction,
        } => format!(
            "{} ({} × {})",
            element.category(),
            coordinates.len(),
            conjunction
        ),
        ElementKind::Document { title, .. } => match (title, element.realisation()) {
            (_, Some(text)) => format!("{}: {}", element.category(), text),
            (Some(title), None) => format!("{}: {}", element.category(), title),
            (None, None) => element.category().to_string(),
        },
    }
}

fn stringify(value: &FeatureValue) -> String {
    match value {
        FeatureValue::Bool(b) => b.to_string(),
        FeatureValue::Integer(i) => i.to_string(),
        FeatureValue::Text(s) => s.clone(),
    }
}

/// Builds the snapshot of an element and all its descendants
pub fn snapshot_from_element(element: &Element) -> ElementSnapshot {
    let mut snapshot = ElementSnapshot::new(element.node_type(), label_for(element))
        .with_attribute("category", element.category().as_str());

    for (key, value) in element.features().iter() {
        snapshot = snapshot.with_attribute(key, stringify(value));
    }
    if let Some(text) = element.realisation() {
        snapshot = snapshot.with_attribute("realisation", text);
    }

    snapshot.with_children(
        element
            .components()
            .iter()
            .map(snapshot_from_element)
            .collect(),
    )
}
