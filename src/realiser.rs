//! Configured realisation
//!
//! A [Realiser] is built once from a [ProseConfig] and then shared. Configuration problems,
//! such as a format name nobody registered, surface here at setup and never per request.

use prose_babel::{FormatError, FormatRegistry};
use prose_config::{ConfigError, Loader, ProseConfig};
use prose_core::aggregation::Aggregator;
use prose_core::{Element, Orthography, Pipeline, PipelineError, Realisation};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

pub struct Realiser {
    pipeline: Pipeline,
    aggregator: Aggregator,
    format: Option<String>,
}

impl Realiser {
    /// Builds a realiser with the default formats available
    pub fn from_config(config: &ProseConfig) -> Result<Self, SetupError> {
        Self::with_registry(config, &FormatRegistry::with_defaults())
    }

    /// Loads the embedded defaults, layers `path` over them if given, then builds
    pub fn load(path: Option<&Path>) -> Result<Self, SetupError> {
        let loader = match path {
            Some(path) => Loader::new().with_file(path),
            None => Loader::new(),
        };
        Self::from_config(&loader.build()?)
    }

    pub fn with_registry(
        config: &ProseConfig,
        registry: &FormatRegistry,
    ) -> Result<Self, SetupError> {
        let mut pipeline = Pipeline::new()
            .with_orthography(Orthography::new(config.orthography))
            .with_debug(config.pipeline.debug);

        let format = config.formatting.formatter().map(str::to_string);
        if let Some(name) = &format {
            pipeline = pipeline.with_formatter(registry.stage(name)?);
        }
        tracing::debug!(format = ?format, debug = config.pipeline.debug, "realiser ready");

        Ok(Self {
            pipeline,
            aggregator: Aggregator::standard(config.aggregation.lemma_policy),
            format,
        })
    }

    /// Runs the whole pipeline over a tree
    pub fn realise(&self, element: Element) -> Result<Realisation, PipelineError> {
        self.pipeline.realise(element)
    }

    /// Realises a bare phrase as a sentence; `None` if nothing could be realised
    pub fn realise_sentence(&self, element: Element) -> Option<String> {
        self.pipeline.realise_sentence(element)
    }

    /// Merges consecutive sibling clauses where a reduction rule applies
    pub fn aggregate(&self, elements: Vec<Element>) -> Vec<Element> {
        self.aggregator.aggregate(elements)
    }

    /// The configured format, or `None` when formatting is off
    pub fn format_name(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn into_pipeline(self) -> Pipeline {
        self.pipeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prose_config::load_defaults;

    #[test]
    fn unknown_format_fails_at_setup() {
        let mut config = load_defaults().unwrap();
        config.formatting.default_format = "docx".into();
        let err = Realiser::from_config(&config).err().unwrap();
        assert_eq!(err.to_string(), "format 'docx' not found");
    }

    #[test]
    fn none_turns_formatting_off() {
        let mut config = load_defaults().unwrap();
        config.formatting.default_format = "none".into();
        let realiser = Realiser::from_config(&config).unwrap();
        assert_eq!(realiser.format_name(), None);
        assert!(!realiser.pipeline().has_formatter());
    }

    #[test]
    fn defaults_format_as_text() {
        let realiser = Realiser::load(None).unwrap();
        assert_eq!(realiser.format_name(), Some("text"));
        assert_eq!(
            realiser.realise_sentence(Element::literal("it works")),
            Some("It works.".to_string())
        );
    }
}
