//! # prose
//!
//! Surface realisation for natural-language generation: turns annotated element trees into
//! punctuated, capitalised, formatted text.
//!
//! The work is split across the workspace:
//!
//!     prose-core     Element tree, aggregation, orthography, the stage pipeline
//!     prose-babel    Output formats (text, html, treeviz) and the format registry
//!     prose-config   Layered TOML configuration
//!     prose-server   Length-prefixed TCP service
//!     prose-cli      The `prose` binary
//!
//! This crate wires the first three together. [Realiser] is the usual entry point:
//!
//!     let config = prose_config::load_defaults()?;
//!     let realiser = Realiser::from_config(&config)?;
//!     let text = realiser.realise(tree)?.text;

pub mod realiser;

pub use prose_babel::{Format, FormatError, FormatRegistry};
pub use prose_config::{load_defaults, Loader, ProseConfig};
pub use prose_core::{
    Category, DiscourseFunction, DocumentCategory, Element, LexicalCategory, PhraseCategory,
    Pipeline, PipelineError, Realisation,
};
pub use realiser::{Realiser, SetupError};
