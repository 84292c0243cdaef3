//! Stage composition
//!
//! Every pipeline stage implements [Runnable]. The realisation
//! [Pipeline](crate::pipeline::Pipeline) holds its stages as boxed runnables, so external
//! syntax and morphology realisers plug in by implementing this trait:
//!
//! ```rust,ignore
//! struct Lexicon { /* inflection tables */ }
//!
//! impl Runnable<Element, Element> for Lexicon {
//!     fn run(&self, input: Element) -> Result<Element, TransformError> {
//!         // set the inflected form of every word as its realisation
//!     }
//! }
//!
//! let pipeline = Pipeline::new().with_morphology(Lexicon::load()?);
//! ```

pub mod stages;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("Stage '{stage}' failed: {message}")]
    StageFailed { stage: String, message: String },
}

/// Anything that turns an input into an output
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> Result<O, TransformError>;
}
