//! Error types for the store.

use cellstash_core::ValueError;
use cellstash_doc::DocError;
use thiserror::Error;

/// Errors that can occur during store operations.
///
/// All of these are local, recoverable conditions surfaced synchronously;
/// none are fatal to the hosting process, and none warrant retries.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The scope tag does not name a sheet in the backing document.
    #[error("invalid scope {scope:?}: no such sheet in the backing document")]
    InvalidScope { scope: String },

    /// A get or put was issued with an empty key.
    #[error("empty key")]
    EmptyKey,

    /// A scoped operation ran before any scope was established.
    ///
    /// Stores initialize to the global scope, so ordinary call paths never
    /// hit this.
    #[error("no scope has been selected")]
    UndefinedScope,

    /// The document reported no active sheet to adopt as the scope.
    #[error("the document has no active sheet")]
    NoActiveSheet,

    /// Value coercion or object encoding failed.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The document adapter failed outside scope resolution.
    #[error("document error: {0}")]
    Document(#[from] DocError),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
