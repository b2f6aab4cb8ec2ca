//! The document adapter trait: the minimal capability a store needs from
//! its backing medium.
//!
//! Methods take `&self`; implementations synchronize internally so that
//! several stores can share one document handle. The trait is synchronous
//! by design: the backing medium is a single-threaded document session.

use crate::error::Result;
use crate::layout::RawRow;

/// A tabular document that can host a hidden settings table.
pub trait TabularDocument: Send + Sync {
    /// True if a sheet with this name exists in the document.
    fn has_sheet(&self, name: &str) -> bool;

    /// The name of the currently active sheet, if the document has one.
    fn active_sheet(&self) -> Option<String>;

    /// Read the full contents of the hidden settings table.
    ///
    /// Returns an empty vector when the table has never been written.
    fn read_rows(&self) -> Result<Vec<RawRow>>;

    /// Rewrite the hidden settings table wholesale, creating it on demand.
    fn write_rows(&self, rows: &[RawRow]) -> Result<()>;
}
