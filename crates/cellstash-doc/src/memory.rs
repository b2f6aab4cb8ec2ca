//! In-memory implementation of the document adapter.
//!
//! The primary test double, and a usable headless backing store. Same
//! semantics as the file-backed workbook but nothing survives drop.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::error::{DocError, Result};
use crate::layout::{RawRow, StoreLayout};
use crate::model::{SheetVisibility, Workbook};
use crate::traits::TabularDocument;

/// An in-memory workbook behind a lock.
///
/// Carries a read counter so tests can assert how often the settings table
/// was actually loaded.
pub struct MemoryWorkbook {
    inner: RwLock<Workbook>,
    layout: StoreLayout,
    reads: AtomicUsize,
}

impl MemoryWorkbook {
    /// An empty workbook with no sheets.
    pub fn new() -> Self {
        Self::from_workbook(Workbook::new())
    }

    /// A workbook with the given visible sheets; the first becomes active.
    pub fn with_sheets<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_workbook(Workbook::with_sheets(names))
    }

    /// Wrap an existing workbook model.
    pub fn from_workbook(workbook: Workbook) -> Self {
        MemoryWorkbook {
            inner: RwLock::new(workbook),
            layout: StoreLayout::default(),
            reads: AtomicUsize::new(0),
        }
    }

    /// Use a non-default settings-table layout.
    pub fn with_layout(workbook: Workbook, layout: StoreLayout) -> Self {
        MemoryWorkbook {
            inner: RwLock::new(workbook),
            layout,
            reads: AtomicUsize::new(0),
        }
    }

    /// Append a visible sheet.
    pub fn add_sheet(&self, name: &str) -> bool {
        self.inner.write().unwrap().add_sheet(name)
    }

    /// Select the active sheet.
    pub fn set_active(&self, name: &str) -> Result<()> {
        let mut wb = self.inner.write().unwrap();
        if wb.set_active(name) {
            Ok(())
        } else {
            Err(DocError::NoSuchSheet(name.to_string()))
        }
    }

    /// Visibility of the named sheet, if it exists. Test introspection.
    pub fn sheet_visibility(&self, name: &str) -> Option<SheetVisibility> {
        self.inner.read().unwrap().sheet(name).map(|s| s.visibility)
    }

    /// Raw cell contents of a sheet. Test introspection.
    pub fn raw_cell(&self, sheet: &str, row: u32, col: u32) -> Option<String> {
        self.inner
            .read()
            .unwrap()
            .sheet(sheet)
            .and_then(|s| s.cell(row, col).map(str::to_string))
    }

    /// How many times the settings table has been read.
    pub fn read_calls(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }
}

impl Default for MemoryWorkbook {
    fn default() -> Self {
        Self::new()
    }
}

impl TabularDocument for MemoryWorkbook {
    fn has_sheet(&self, name: &str) -> bool {
        self.inner.read().unwrap().has_sheet(name)
    }

    fn active_sheet(&self) -> Option<String> {
        self.inner.read().unwrap().active_sheet().map(str::to_string)
    }

    fn read_rows(&self) -> Result<Vec<RawRow>> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        Ok(self.layout.read_rows(&self.inner.read().unwrap()))
    }

    fn write_rows(&self, rows: &[RawRow]) -> Result<()> {
        self.layout.write_rows(&mut self.inner.write().unwrap(), rows);
        Ok(())
    }
}
