//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Arc;

use cellstash::Store;
use cellstash_doc::MemoryWorkbook;

/// A test fixture wrapping a shared in-memory workbook.
///
/// Stores created through the fixture all share the same document handle,
/// which is what the cross-instance tests need.
pub struct TestFixture {
    pub doc: Arc<MemoryWorkbook>,
}

impl TestFixture {
    /// A workbook with two visible sheets, `Sheet1` active.
    pub fn new() -> Self {
        Self::with_sheets(&["Sheet1", "Sheet2"])
    }

    /// A workbook with no sheets at all.
    pub fn empty() -> Self {
        TestFixture {
            doc: Arc::new(MemoryWorkbook::new()),
        }
    }

    /// A workbook with the given visible sheets; the first becomes active.
    pub fn with_sheets(names: &[&str]) -> Self {
        TestFixture {
            doc: Arc::new(MemoryWorkbook::with_sheets(names.iter().copied())),
        }
    }

    /// A fresh store over the fixture's document.
    pub fn store(&self) -> Store<MemoryWorkbook> {
        Store::new(self.doc.clone())
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
