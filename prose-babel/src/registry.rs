//! Format registry for format discovery and selection

use crate::error::FormatError;
use crate::format::Format;
use crate::stage::FormatStage;
use prose_core::Element;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of output formats, keyed by name
pub struct FormatRegistry {
    formats: HashMap<String, Arc<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format, replacing any format of the same name
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Arc::new(format));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn serialize(&self, element: &Element, format: &str) -> Result<String, FormatError> {
        self.get(format)?.serialize(element)
    }

    /// A pipeline stage rendering with the named format
    pub fn stage(&self, name: &str) -> Result<FormatStage, FormatError> {
        self.formats
            .get(name)
            .map(|f| FormatStage::new(Arc::clone(f)))
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Create a registry with the built-in formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::text::TextFormat);
        registry.register(crate::formats::html::HtmlFormat);
        registry.register(crate::formats::treeviz::TreevizFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
