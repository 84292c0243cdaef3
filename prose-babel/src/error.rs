//! Formatting errors

use prose_core::NodePath;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("format '{0}' not found")]
    FormatNotFound(String),
    #[error("{0}")]
    NotSupported(String),
    /// The tree does not have the shape this format expects, e.g. an unrealised sentence
    #[error("malformed element at {path}: {reason}")]
    Malformed { path: NodePath, reason: String },
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
