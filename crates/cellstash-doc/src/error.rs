//! Error types for the document adapter.

use thiserror::Error;

/// Errors raised by document adapters.
#[derive(Debug, Error)]
pub enum DocError {
    /// I/O error from a file-backed document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error from a file-backed document.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A named sheet does not exist in the document.
    #[error("no such sheet: {0:?}")]
    NoSuchSheet(String),
}

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, DocError>;
