//! Formats as pipeline stages

use crate::format::Format;
use prose_core::transforms::{Runnable, TransformError};
use prose_core::Element;
use std::sync::Arc;

/// Runs a [Format] as the last stage of a realisation pipeline
#[derive(Clone)]
pub struct FormatStage {
    format: Arc<dyn Format>,
}

impl FormatStage {
    pub fn new(format: Arc<dyn Format>) -> Self {
        Self { format }
    }

    pub fn format_name(&self) -> &str {
        self.format.name()
    }
}

impl Runnable<Element, String> for FormatStage {
    fn run(&self, input: Element) -> Result<String, TransformError> {
        tracing::debug!(format = self.format.name(), "formatting");
        self.format
            .serialize(&input)
            .map_err(|e| TransformError::StageFailed {
                stage: self.format.name().to_string(),
                message: e.to_string(),
            })
    }
}
