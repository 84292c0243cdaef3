//! Tree dumps
//!
//! Formats in this crate describe element trees rather than realise them; they back the
//! pipeline's debug traces. Output formats live in the prose-babel crate.

pub mod treeviz;

pub use treeviz::to_treeviz_str;
