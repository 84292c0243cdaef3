//! Format implementations
//!
//! Each format converts a realised element tree into one text representation.

pub mod html;
pub mod text;
pub mod treeviz;

pub use html::HtmlFormat;
pub use text::TextFormat;
pub use treeviz::TreevizFormat;
