//! Error types for cellstash core.

use thiserror::Error;

use crate::value::ValueKind;

/// Errors raised while coercing or encoding values.
#[derive(Debug, Error)]
pub enum ValueError {
    #[error("expected a {expected} value, found {found}")]
    KindMismatch {
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("object encoding error: {0}")]
    Encode(String),

    #[error("object decoding error: {0}")]
    Decode(String),
}
