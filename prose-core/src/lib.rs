//! # prose-core
//!
//! The post-grammatical half of a surface realiser: it takes a tree whose words are already
//! inflected and annotated (category, discourse function, features) and turns it into
//! punctuated text.
//!
//! File Layout
//!
//!     src
//!     ├── element        The shared tree: categories, features, paths, snapshots
//!     ├── aggregation    Constituent pairing and conjunction reduction rules
//!     ├── orthography    Capitalisation, sentence termination, comma placement
//!     ├── transforms     The Runnable stage trait and the built-in stages
//!     ├── pipeline.rs    The orchestrator: syntax → morphology → orthography → formatting
//!     └── formats        Tree dumps used for debugging (treeviz)
//!
//! Data flows in one direction: an optional aggregation pass merges sibling clauses, the
//! pipeline then runs the external syntax and morphology seams, orthography collapses every
//! SENTENCE into its final string, and a formatter (see the prose-babel crate) lays the
//! sentences out as a document.
//!
//! Every stage takes its input tree by value and hands a new one to the next stage. No stage
//! keeps a tree beyond its own call, and no stage holds mutable state shared across calls.

pub mod aggregation;
pub mod element;
pub mod formats;
pub mod orthography;
pub mod pipeline;
pub mod transforms;

pub use element::{
    Category, DiscourseFunction, DocumentCategory, Element, ElementKind, FeatureValue, Features,
    LexicalCategory, NodePath, PhraseCategory,
};
pub use orthography::{Orthography, OrthographyError, OrthographyOptions};
pub use pipeline::{Pipeline, PipelineError, Realisation, StageTrace};
