//! Format trait definition
//!
//! Every output format implements [Format]. Formats only serialise: trees come from the
//! realisation pipeline, never from parsing an output format back.

use crate::error::FormatError;
use prose_core::Element;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Format for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn serialize(&self, element: &Element) -> Result<String, FormatError> {
///         Ok(element.text().to_uppercase())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "text", "html")
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// File extensions conventionally used for this format
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Renders an orthographically realised tree
    fn serialize(&self, element: &Element) -> Result<String, FormatError>;
}
