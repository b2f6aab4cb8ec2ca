//! # cellstash Document Adapter
//!
//! The seam between a cellstash store and the tabular document it persists
//! into. The store never touches a concrete spreadsheet API; it only sees
//! the [`TabularDocument`] trait.
//!
//! ## Overview
//!
//! - [`TabularDocument`] - the adapter trait: sheet existence, the active
//!   sheet, and reading/writing the hidden settings table
//! - [`Workbook`] / [`Sheet`] - a minimal workbook model (named sheets,
//!   sparse string cells, visibility flags)
//! - [`MemoryWorkbook`] - in-memory document, the primary test double
//! - [`JsonWorkbook`] - the same model persisted to a JSON file
//! - [`StoreLayout`] - where the hidden table lives and how rows map to
//!   cells
//!
//! ## The hidden table
//!
//! Settings rows live in a reserved sheet (default name `cstashstor`)
//! created on demand with the *very hidden* visibility flag, so it is not
//! reachable through ordinary sheet navigation. The first two rows are
//! reserved for internal flags; data rows start below them, three columns
//! wide: scope tag, key, rendered value.
//!
//! A production adapter for a live spreadsheet host implements the same
//! trait over its document API; the JSON workbook stands in for it here.

pub mod error;
pub mod json;
pub mod layout;
pub mod memory;
pub mod model;
pub mod traits;

pub use error::{DocError, Result};
pub use json::JsonWorkbook;
pub use layout::{RawRow, StoreLayout, DATA_START_ROW, STORE_SHEET_NAME};
pub use memory::MemoryWorkbook;
pub use model::{Sheet, SheetVisibility, Workbook};
pub use traits::TabularDocument;
