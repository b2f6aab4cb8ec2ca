//! # cellstash
//!
//! An embedded key/value settings store that persists typed values inside
//! a hidden sheet of a tabular document.
//!
//! ## Overview
//!
//! Callers select a *scope* - the whole document, or one named sheet - and
//! issue typed get/put calls against a [`Store`]. Records live in memory;
//! the backing table is read once, lazily, and rewritten wholesale on
//! [`Store::flush`]. The document itself is reached only through the
//! [`TabularDocument`] adapter trait, so the same store runs over the
//! in-memory workbook, the JSON-file workbook, or an adapter for a live
//! spreadsheet host.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use cellstash::{MemoryWorkbook, Store};
//!
//! let doc = Arc::new(MemoryWorkbook::with_sheets(["Sheet1"]));
//! let mut store = Store::new(doc.clone());
//!
//! // Document-global settings live in the default (empty) scope.
//! store.put("zoom", 125i64).unwrap();
//!
//! // Per-sheet settings live in a scope named after the sheet.
//! store.set_scope("Sheet1").unwrap();
//! store.put("frozen", true).unwrap();
//!
//! // Nothing reaches the document until flush.
//! store.flush().unwrap();
//!
//! // A second store over the same document sees the flushed rows.
//! let mut other = Store::new(doc);
//! assert_eq!(other.get("zoom", 100i64).unwrap(), 125);
//! ```
//!
//! ## Consistency
//!
//! Each store holds an independent in-memory copy of the settings table.
//! Flush is a blind full rewrite: when several stores share one document,
//! the last flush wins and earlier unseen changes are overwritten. This is
//! deliberate, documented behavior; the store adds no cross-instance
//! locking or revalidation.
//!
//! ## Re-exports
//!
//! - `cellstash::core` - value model, records, scopes
//! - `cellstash::doc` - the document adapter trait and workbook backends

pub mod error;
pub mod store;

// Re-export component crates
pub use cellstash_core as core;
pub use cellstash_doc as doc;

// Re-export main types for convenience
pub use error::{Result, StoreError};
pub use store::{ScopeTable, Store};

// Re-export commonly used component types
pub use cellstash_core::{FromValue, Record, Scope, Value, ValueError, ValueKind};
pub use cellstash_doc::{
    JsonWorkbook, MemoryWorkbook, RawRow, SheetVisibility, StoreLayout, TabularDocument, Workbook,
};
