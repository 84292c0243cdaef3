//! Realisation pipeline
//!
//! The pipeline runs, in order:
//!
//! 1. **Syntax** - external seam; defaults to [CoordinationSyntax]
//! 2. **Morphology** - external seam; defaults to [Identity]
//! 3. **Orthography** - see [crate::orthography]
//! 4. **Formatting** - optional; any `Runnable<Element, String>`, usually a format stage
//!    from prose-babel. Without one, the orthography result's plain text is returned.
//!
//! A pipeline is configured once and then only read, so one instance can be shared between
//! concurrent requests. Each call owns its tree from start to finish.
//!
//! In debug mode every stage appends a treeviz dump of its output to the [Realisation]'s
//! trace. The trace never influences the realised text.

use crate::element::Element;
use crate::formats::to_treeviz_str;
use crate::orthography::{plain_text, Orthography, OrthographyError};
use crate::transforms::stages::{CoordinationSyntax, Identity};
use crate::transforms::{Runnable, TransformError};
use thiserror::Error;

pub type ElementStage = Box<dyn Runnable<Element, Element> + Send + Sync>;
pub type FormatterStage = Box<dyn Runnable<Element, String> + Send + Sync>;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{stage} stage failed: {source}")]
    Stage {
        stage: &'static str,
        #[source]
        source: TransformError,
    },
    #[error(transparent)]
    Orthography(#[from] OrthographyError),
}

/// A dump of the tree after one stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageTrace {
    pub stage: &'static str,
    pub dump: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Realisation {
    pub text: String,
    /// Empty unless the pipeline runs in debug mode
    pub trace: Vec<StageTrace>,
}

pub struct Pipeline {
    syntax: ElementStage,
    morphology: ElementStage,
    orthography: Orthography,
    formatter: Option<FormatterStage>,
    debug: bool,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            syntax: Box::new(CoordinationSyntax::new()),
            morphology: Box::new(Identity),
            orthography: Orthography::default(),
            formatter: None,
            debug: false,
        }
    }

    pub fn with_syntax(
        mut self,
        stage: impl Runnable<Element, Element> + Send + Sync + 'static,
    ) -> Self {
        self.syntax = Box::new(stage);
        self
    }

    pub fn with_morphology(
        mut self,
        stage: impl Runnable<Element, Element> + Send + Sync + 'static,
    ) -> Self {
        self.morphology = Box::new(stage);
        self
    }

    pub fn with_orthography(mut self, orthography: Orthography) -> Self {
        self.orthography = orthography;
        self
    }

    pub fn with_formatter(
        mut self,
        stage: impl Runnable<Element, String> + Send + Sync + 'static,
    ) -> Self {
        self.formatter = Some(Box::new(stage));
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn orthography(&self) -> &Orthography {
        &self.orthography
    }

    pub fn has_formatter(&self) -> bool {
        self.formatter.is_some()
    }

    fn record(
        &self,
        trace: &mut Vec<StageTrace>,
        stage: &'static str,
        dump: impl FnOnce() -> String,
    ) {
        if self.debug {
            trace.push(StageTrace { stage, dump: dump() });
        }
    }

    fn run_stage(
        stage_name: &'static str,
        stage: &ElementStage,
        element: Element,
    ) -> Result<Element, PipelineError> {
        tracing::debug!(stage = stage_name, "running stage");
        stage.run(element).map_err(|source| PipelineError::Stage {
            stage: stage_name,
            source,
        })
    }

    fn realise_traced(
        &self,
        element: Element,
        trace: &mut Vec<StageTrace>,
    ) -> Result<Element, PipelineError> {
        let element = Self::run_stage("syntax", &self.syntax, element)?;
        self.record(trace, "syntax", || to_treeviz_str(&element));

        let element = Self::run_stage("morphology", &self.morphology, element)?;
        self.record(trace, "morphology", || to_treeviz_str(&element));

        tracing::debug!(stage = "orthography", "running stage");
        let element = self.orthography.realise(element)?;
        self.record(trace, "orthography", || to_treeviz_str(&element));
        Ok(element)
    }

    /// Runs every stage up to and including orthography, returning the realised tree
    pub fn realise_tree(&self, element: Element) -> Result<Element, PipelineError> {
        self.realise_traced(element, &mut Vec::new())
    }

    /// Runs the full pipeline
    pub fn realise(&self, element: Element) -> Result<Realisation, PipelineError> {
        let mut trace = Vec::new();
        let element = self.realise_traced(element, &mut trace)?;

        let text = match &self.formatter {
            Some(formatter) => {
                tracing::debug!(stage = "formatting", "running stage");
                formatter
                    .run(element)
                    .map_err(|source| PipelineError::Stage {
                        stage: "formatting",
                        source,
                    })?
            }
            None => plain_text(&element),
        };
        self.record(&mut trace, "formatting", || text.clone());

        Ok(Realisation { text, trace })
    }

    /// Realises a bare phrase as a one-sentence document
    ///
    /// Document elements are realised as they are. Empty output counts as nothing realised.
    pub fn try_realise_sentence(&self, element: Element) -> Result<Option<String>, PipelineError> {
        let element = if element.category().is_document() {
            element
        } else {
            Element::sentence(vec![element])
        };
        let realisation = self.realise(element)?;
        if realisation.text.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(realisation.text))
        }
    }

    /// [Pipeline::try_realise_sentence], with failures reported as `None`
    pub fn realise_sentence(&self, element: Element) -> Option<String> {
        match self.try_realise_sentence(element) {
            Ok(text) => text,
            Err(err) => {
                tracing::debug!(error = %err, "sentence could not be realised");
                None
            }
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
