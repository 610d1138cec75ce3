//! Error types for extraction and export

use thiserror::Error;

/// Failures that prevent an export from producing anything at all.
///
/// Missing page fragments are not errors; they degrade to empty values
/// inside the extractor.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("document is empty or has no element content")]
    EmptyDocument,

    #[error("selector '{selector}' failed to compile: {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("UTC offset of {0} minutes is out of range")]
    InvalidOffset(i32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;
