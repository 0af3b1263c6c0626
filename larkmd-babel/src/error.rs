//! Error types for conversion operations

use std::fmt;

/// Errors that can occur during conversion operations
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Error while parsing Markdown input
    Parse(String),
    /// Error while serializing a block collection
    Serialize(String),
    /// The injected upload capability failed
    Upload(String),
    /// A document collaborator (fetch/write) failed
    Remote(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Parse(msg) => write!(f, "Parse error: {msg}"),
            ConvertError::Serialize(msg) => write!(f, "Serialization error: {msg}"),
            ConvertError::Upload(msg) => write!(f, "Upload error: {msg}"),
            ConvertError::Remote(msg) => write!(f, "Remote error: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}
