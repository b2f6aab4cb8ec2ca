//! A record: one key/value pair with its owning scope.

use serde::{Deserialize, Serialize};

use crate::scope::Scope;
use crate::value::Value;

/// One stored setting.
///
/// Keys are unique within a scope; later writes to the same key replace the
/// record's value in place. The non-empty-key invariant is enforced at the
/// store boundary, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The scope this record belongs to.
    pub scope: Scope,
    /// The key, unique within the scope.
    pub key: String,
    /// The stored value.
    pub value: Value,
}

impl Record {
    /// Create a new record.
    pub fn new(scope: Scope, key: impl Into<String>, value: impl Into<Value>) -> Self {
        Record {
            scope,
            key: key.into(),
            value: value.into(),
        }
    }
}
