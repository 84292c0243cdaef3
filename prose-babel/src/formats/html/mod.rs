//! HTML format
//!
//! Renders a realised tree as an HTML fragment: headings for titles, `<p>` for paragraphs,
//! `<ul>`/`<ol>` for lists. Export only.

mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use prose_core::Element;

pub use serializer::serialize_to_html;

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment with semantic list markup"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn serialize(&self, element: &Element) -> Result<String, FormatError> {
        serialize_to_html(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata() {
        let format = HtmlFormat;
        assert_eq!(format.name(), "html");
        assert_eq!(format.file_extensions(), &["html", "htm"]);
    }
}
