//! Plain text format
//!
//! Titles on their own lines, paragraphs separated by blank lines, ` * ` bullets and dotted
//! numbering (`1.2 - `) for nested enumerated lists. See [serializer] for the full layout.

pub mod numbering;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use prose_core::Element;

pub use numbering::NestedCounter;
pub use serializer::serialize_to_text;

#[derive(Debug, Default, Clone, Copy)]
pub struct TextFormat;

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain text with numbered and bulleted lists"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn serialize(&self, element: &Element) -> Result<String, FormatError> {
        serialize_to_text(element)
    }
}
