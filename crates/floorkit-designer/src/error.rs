//! Error types for the designer crate.
//!
//! Only the import boundary can fail: geometric rejections and empty
//! operations are ordinary outcomes and are reported through return values.

use thiserror::Error;

/// Errors raised by the designer.
#[derive(Error, Debug)]
pub enum DesignerError {
    /// The import input is not JSON at all.
    #[error("Invalid JSON file. Please upload a valid layout export. ({0})")]
    Parse(#[source] serde_json::Error),

    /// The export document could not be serialized.
    #[error("Failed to serialize layout: {0}")]
    Serialize(#[source] serde_json::Error),

    /// I/O error while reading or writing a layout file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DesignerError {
    /// Message suitable for showing to the user as-is.
    pub fn user_message(&self) -> &'static str {
        match self {
            DesignerError::Parse(_) => "Invalid JSON file. Please upload a valid layout export.",
            DesignerError::Serialize(_) => "The layout could not be exported.",
            DesignerError::Io(_) => "The layout file could not be read or written.",
        }
    }
}

/// Result type alias for designer operations.
pub type Result<T> = std::result::Result<T, DesignerError>;
