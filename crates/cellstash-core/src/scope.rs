//! Scope tags: named partitions of a store.
//!
//! The empty tag is the global scope and is always valid. A non-empty tag
//! names one sheet of the backing document; validating that the sheet
//! actually exists is the store's job, not this type's.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scope tag. Empty = the whole document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Scope(String);

impl Scope {
    /// The global (whole-document) scope.
    pub fn global() -> Self {
        Scope(String::new())
    }

    /// A scope for the named sheet. An empty name yields the global scope.
    pub fn new(tag: impl Into<String>) -> Self {
        Scope(tag.into())
    }

    /// True for the global scope.
    pub fn is_global(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw tag (empty for the global scope).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Scope {
    fn default() -> Self {
        Scope::global()
    }
}

impl From<&str> for Scope {
    fn from(tag: &str) -> Self {
        Scope::new(tag)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_global() {
            f.write_str("<global>")
        } else {
            f.write_str(&self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_scope() {
        assert!(Scope::global().is_global());
        assert!(Scope::new("").is_global());
        assert!(!Scope::new("Sheet1").is_global());
    }

    #[test]
    fn test_display() {
        assert_eq!(Scope::global().to_string(), "<global>");
        assert_eq!(Scope::new("Data").to_string(), "Data");
    }
}
