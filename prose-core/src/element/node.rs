//! Element nodes
//!
//! [Element] is the node type every stage reads and rewrites. The per-kind payload lives in
//! [ElementKind]; everything common to all kinds (category, features, parent category and the
//! cached realisation) lives on [Element] itself.
//!
//! Equality ignores the parent category: two subtrees are the same form if they have the same
//! kinds, categories, features, realisations and children, wherever they are attached.

use super::category::{Category, DocumentCategory, LexicalCategory, PhraseCategory};
use super::features::{DiscourseFunction, FeatureValue, Features};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementKind {
    /// A lexical item. The inflected form, once known, is the element's realisation.
    Word { base_form: String },
    /// Pre-rendered text
    StringLiteral { text: String },
    /// Children forming one constituent
    List {
        #[serde(default)]
        children: Vec<Element>,
    },
    /// Coordinates joined by a conjunction
    Coordinated {
        #[serde(default)]
        coordinates: Vec<Element>,
        conjunction: String,
    },
    /// A structural node; its category is always a [DocumentCategory]
    Document {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default)]
        components: Vec<Element>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    #[serde(flatten)]
    pub(crate) kind: ElementKind,
    pub(crate) category: Category,
    #[serde(default, skip_serializing_if = "Features::is_empty")]
    pub(crate) features: Features,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) realisation: Option<String>,
    #[serde(skip)]
    pub(crate) parent: Option<Category>,
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.category == other.category
            && self.features == other.features
            && self.realisation == other.realisation
    }
}

impl Element {
    fn new(kind: ElementKind, category: Category) -> Self {
        let mut element = Self {
            kind,
            category,
            features: Features::new(),
            realisation: None,
            parent: None,
        };
        element.stamp_children();
        element
    }

    /// A word that has not been inflected
    pub fn word(base_form: impl Into<String>, category: LexicalCategory) -> Self {
        Self::new(
            ElementKind::Word {
                base_form: base_form.into(),
            },
            category.into(),
        )
    }

    /// A word together with its inflected surface form
    pub fn word_form(
        base_form: impl Into<String>,
        form: impl Into<String>,
        category: LexicalCategory,
    ) -> Self {
        let mut word = Self::word(base_form, category);
        word.realisation = Some(form.into());
        word
    }

    /// Canned text
    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(
            ElementKind::StringLiteral { text: text.into() },
            PhraseCategory::CannedText.into(),
        )
    }

    pub fn list(category: impl Into<Category>, children: Vec<Element>) -> Self {
        Self::new(ElementKind::List { children }, category.into())
    }

    pub fn coordinated(
        category: impl Into<Category>,
        coordinates: Vec<Element>,
        conjunction: impl Into<String>,
    ) -> Self {
        Self::new(
            ElementKind::Coordinated {
                coordinates,
                conjunction: conjunction.into(),
            },
            category.into(),
        )
    }

    pub fn document(
        category: DocumentCategory,
        title: Option<String>,
        components: Vec<Element>,
    ) -> Self {
        Self::new(ElementKind::Document { title, components }, category.into())
    }

    pub fn sentence(components: Vec<Element>) -> Self {
        Self::document(DocumentCategory::Sentence, None, components)
    }

    // Builders

    pub fn with_function(mut self, function: DiscourseFunction) -> Self {
        self.features.set_discourse_function(function);
        self
    }

    pub fn with_feature(mut self, key: impl Into<String>, value: impl Into<FeatureValue>) -> Self {
        self.features.set(key, value);
        self
    }

    pub fn elided(mut self) -> Self {
        self.features.set_elided(true);
        self
    }

    pub fn appositive(mut self) -> Self {
        self.features.set_appositive(true);
        self
    }

    pub fn interrogative(mut self) -> Self {
        self.features.set_interrogative(true);
        self
    }

    pub fn passive(mut self) -> Self {
        self.features.set_passive(true);
        self
    }

    // Accessors

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn features(&self) -> &Features {
        &self.features
    }

    pub fn features_mut(&mut self) -> &mut Features {
        &mut self.features
    }

    /// The category of the element this one is attached to, if any
    pub fn parent_category(&self) -> Option<Category> {
        self.parent
    }

    pub fn function(&self) -> Option<DiscourseFunction> {
        self.features.discourse_function()
    }

    /// The function used to dispatch on this element: a list answers with its first child's.
    pub fn dispatch_function(&self) -> Option<DiscourseFunction> {
        match &self.kind {
            ElementKind::List { children } => children.first().and_then(Element::function),
            _ => self.function(),
        }
    }

    pub fn realisation(&self) -> Option<&str> {
        self.realisation.as_deref()
    }

    pub fn set_realisation(&mut self, text: impl Into<String>) {
        self.realisation = Some(text.into());
    }

    /// The best text known for this element: its realisation, else its own base text.
    pub fn text(&self) -> &str {
        if let Some(text) = &self.realisation {
            return text;
        }
        match &self.kind {
            ElementKind::Word { base_form } => base_form,
            ElementKind::StringLiteral { text } => text,
            _ => "",
        }
    }

    pub fn title(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Document { title, .. } => title.as_deref(),
            _ => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(
            self.kind,
            ElementKind::Word { .. } | ElementKind::StringLiteral { .. }
        )
    }

    pub fn is_elided(&self) -> bool {
        self.features.is_elided()
    }

    pub fn components(&self) -> &[Element] {
        match &self.kind {
            ElementKind::List { children } => children,
            ElementKind::Coordinated { coordinates, .. } => coordinates,
            ElementKind::Document { components, .. } => components,
            ElementKind::Word { .. } | ElementKind::StringLiteral { .. } => &[],
        }
    }

    pub fn components_mut(&mut self) -> &mut [Element] {
        match &mut self.kind {
            ElementKind::List { children } => children,
            ElementKind::Coordinated { coordinates, .. } => coordinates,
            ElementKind::Document { components, .. } => components,
            ElementKind::Word { .. } | ElementKind::StringLiteral { .. } => &mut [],
        }
    }

    /// Takes the components out, leaving the element with none
    pub(crate) fn take_components(&mut self) -> Vec<Element> {
        match &mut self.kind {
            ElementKind::List { children } => std::mem::take(children),
            ElementKind::Coordinated { coordinates, .. } => std::mem::take(coordinates),
            ElementKind::Document { components, .. } => std::mem::take(components),
            ElementKind::Word { .. } | ElementKind::StringLiteral { .. } => Vec::new(),
        }
    }

    /// Puts components back after [Element::take_components]; leaves ignore them
    pub(crate) fn replace_components(&mut self, replacement: Vec<Element>) {
        match &mut self.kind {
            ElementKind::List { children } => *children = replacement,
            ElementKind::Coordinated { coordinates, .. } => *coordinates = replacement,
            ElementKind::Document { components, .. } => *components = replacement,
            ElementKind::Word { .. } | ElementKind::StringLiteral { .. } => {}
        }
        self.stamp_children();
    }

    /// Follows component indexes from this element
    pub fn component_at(&self, path: &[usize]) -> Option<&Element> {
        path.iter()
            .try_fold(self, |node, &index| node.components().get(index))
    }

    pub fn component_at_mut(&mut self, path: &[usize]) -> Option<&mut Element> {
        let mut node = self;
        for &index in path {
            node = node.components_mut().get_mut(index)?;
        }
        Some(node)
    }

    /// Label used in dumps: "Word", "StringLiteral", "List", "Coordinated" or "Document"
    pub fn node_type(&self) -> &'static str {
        match self.kind {
            ElementKind::Word { .. } => "Word",
            ElementKind::StringLiteral { .. } => "StringLiteral",
            ElementKind::List { .. } => "List",
            ElementKind::Coordinated { .. } => "Coordinated",
            ElementKind::Document { .. } => "Document",
        }
    }

    /// Base forms of every leaf beneath this element, in order
    pub fn leaf_base_forms(&self) -> Vec<&str> {
        let mut forms = Vec::new();
        self.collect_base_forms(&mut forms);
        forms
    }

    fn collect_base_forms<'a>(&'a self, forms: &mut Vec<&'a str>) {
        match &self.kind {
            ElementKind::Word { base_form } => forms.push(base_form),
            ElementKind::StringLiteral { text } => forms.push(text),
            _ => {
                for component in self.components() {
                    component.collect_base_forms(forms);
                }
            }
        }
    }

    /// Marks every leaf beneath this element (or the element itself, if a leaf) as elided
    pub fn elide_leaves(&mut self) {
        if self.is_leaf() {
            self.features.set_elided(true);
            return;
        }
        for component in self.components_mut() {
            component.elide_leaves();
        }
    }

    /// Describes why this element cannot be processed, if it cannot
    ///
    /// Kind/category agreement and the shape of the features the stages read are checked,
    /// on this node only, not its children.
    pub fn malformation(&self) -> Option<String> {
        let mismatch = match (&self.kind, self.category) {
            (ElementKind::Document { .. }, Category::Document(_)) => None,
            (ElementKind::Document { .. }, category) => Some(format!(
                "document node carries non-document category '{}'",
                category
            )),
            (_, Category::Document(category)) if self.is_leaf() => Some(format!(
                "{} cannot carry document category '{}'",
                self.node_type(),
                category
            )),
            _ => None,
        };
        mismatch.or_else(|| self.features.malformation())
    }

    /// Re-stamps the parent category of every descendant
    pub fn relink(&mut self) {
        let category = self.category;
        for component in self.components_mut() {
            component.parent = Some(category);
            component.relink();
        }
    }

    fn stamp_children(&mut self) {
        let category = self.category;
        for component in self.components_mut() {
            component.parent = Some(category);
        }
    }

    /// Replaces the category and re-stamps the direct children
    pub(crate) fn restamp(&mut self, category: Category, parent: Option<Category>) {
        self.category = category;
        self.parent = parent;
        self.stamp_children();
    }

    /// Parses a tree and links every node to its parent's category
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        let mut element: Element = serde_json::from_str(input)?;
        element.relink();
        Ok(element)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
