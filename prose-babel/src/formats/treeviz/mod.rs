//! Treeviz format
//!
//! The one-node-per-line tree dump from prose-core, exposed as a format so it can be picked by
//! name like any other renderer. Handy for inspecting what orthography produced.

use crate::error::FormatError;
use crate::format::Format;
use prose_core::formats::to_treeviz_str;
use prose_core::Element;

#[derive(Debug, Default, Clone, Copy)]
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Tree dump with one node per line"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree"]
    }

    fn serialize(&self, element: &Element) -> Result<String, FormatError> {
        Ok(to_treeviz_str(element))
    }
}
