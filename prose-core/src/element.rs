//! The element tree shared by every stage
//!
//!     An element is one node of the realisation tree. It is a closed sum of five kinds:
//!
//!         - Word: a lexical item with its base form; the inflected surface form, once the
//!           morphology stage has produced it, lives in the element's cached realisation.
//!         - StringLiteral: opaque, pre-rendered text that no stage looks inside.
//!         - List: a group of children forming one constituent (a set of premodifiers, a
//!           clause after syntax realisation, ...).
//!         - Coordinated: coordinates joined by a conjunction. After syntax realisation the
//!           join points appear as coordinates tagged with the CONJUNCTION discourse function.
//!         - Document: structural nodes (document, section, paragraph, sentence, list,
//!           enumerated list, list item) with an optional title.
//!
//!     Every element also carries exactly one [Category](category::Category), a dynamically
//!     extensible [feature map](features::Features), the category of its container, and an
//!     optional cached realisation.
//!
//! Parents
//!
//!     The only question any stage ever asks of a parent is "what is your category?". So the
//!     back-reference is the container's category, stamped whenever a component is attached
//!     (see [Element::relink]). It never owns anything and is never used for traversal.
//!
//! Lifecycle
//!
//!     Syntax and morphology (external) build the tree. Aggregation reads it and produces new,
//!     partially elided copies. Orthography consumes it and returns a flatter tree in which
//!     every SENTENCE is collapsed into its cached string. Formatting consumes that tree and
//!     returns the final text.

pub mod category;
pub mod features;
pub mod node;
pub mod path;
pub mod snapshot;

pub use category::{Category, DocumentCategory, LexicalCategory, PhraseCategory};
pub use features::{keys, DiscourseFunction, FeatureValue, Features, UnknownDiscourseFunction};
pub use node::{Element, ElementKind};
pub use path::NodePath;
pub use snapshot::{snapshot_from_element, ElementSnapshot};
