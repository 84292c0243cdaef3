//! Document formatting for realised element trees
//!
//!     This crate lays orthographically realised trees out as documents. It receives the tree
//!     produced by the orthography stage of prose-core, in which every SENTENCE already holds
//!     its final string, and renders titles, paragraphs, bulleted and numbered lists.
//!
//! Architecture
//!
//!     - Format trait: uniform interface for every output format
//!     - FormatRegistry: discovery and selection of formats by name
//!     - FormatStage: adapts a format into a pipeline stage
//!     - Format implementations: text, html and treeviz
//!
//!     This is a pure lib: it powers the prose CLI and server but supposes no shell
//!     environment. Nothing here prints, reads env vars or touches files.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── stage.rs                # Format → pipeline stage adapter
//!     ├── formats
//!     │   ├── text                # Plain text, with nested list numbering
//!     │   ├── html                # HTML through an RcDom tree
//!     │   └── treeviz             # Tree dump
//!     └── lib.rs
//!
//! Renderers
//!
//!     The text and html renderers share one dispatch on document category and differ only in
//!     the markup they emit. Numbering state for enumerated lists belongs to a single text
//!     serialisation call and is never shared, so any number of documents can be formatted at
//!     once. HTML needs no counter: `<ol>` numbers itself.
//!
//! Testing
//!     tests
//!     ├── <format>.rs             # End to end layouts per format
//!     └── numbering_proptest.rs   # Counter properties

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;
pub mod stage;

pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;
pub use stage::FormatStage;
