//! JSON-file-backed implementation of the document adapter.
//!
//! Persists the whole workbook model to a JSON file: loaded on open, saved
//! after every settings-table rewrite. This is the durable backend used in
//! tests and headless deployments; a live spreadsheet host would get its
//! own adapter instead.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use crate::error::Result;
use crate::layout::{RawRow, StoreLayout};
use crate::model::Workbook;
use crate::traits::TabularDocument;

/// A workbook persisted to a JSON file.
pub struct JsonWorkbook {
    path: PathBuf,
    inner: RwLock<Workbook>,
    layout: StoreLayout,
}

impl JsonWorkbook {
    /// Create a new file from the given workbook model.
    ///
    /// Writes the file immediately; fails if the path is not writable.
    pub fn create(path: impl AsRef<Path>, workbook: Workbook) -> Result<Self> {
        let doc = JsonWorkbook {
            path: path.as_ref().to_path_buf(),
            inner: RwLock::new(workbook),
            layout: StoreLayout::default(),
        };
        doc.save()?;
        Ok(doc)
    }

    /// Open an existing workbook file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let bytes = fs::read(&path)?;
        let workbook: Workbook = serde_json::from_slice(&bytes)?;
        debug!(path = %path.display(), "opened workbook file");
        Ok(JsonWorkbook {
            path,
            inner: RwLock::new(workbook),
            layout: StoreLayout::default(),
        })
    }

    /// Write the current model back to the file.
    pub fn save(&self) -> Result<()> {
        let wb = self.inner.read().unwrap();
        let json = serde_json::to_vec_pretty(&*wb)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "saved workbook file");
        Ok(())
    }

    /// The file this workbook is persisted to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Select the active sheet and persist the selection.
    pub fn set_active(&self, name: &str) -> Result<()> {
        {
            let mut wb = self.inner.write().unwrap();
            if !wb.set_active(name) {
                return Err(crate::error::DocError::NoSuchSheet(name.to_string()));
            }
        }
        self.save()
    }
}

impl TabularDocument for JsonWorkbook {
    fn has_sheet(&self, name: &str) -> bool {
        self.inner.read().unwrap().has_sheet(name)
    }

    fn active_sheet(&self) -> Option<String> {
        self.inner.read().unwrap().active_sheet().map(str::to_string)
    }

    fn read_rows(&self) -> Result<Vec<RawRow>> {
        Ok(self.layout.read_rows(&self.inner.read().unwrap()))
    }

    fn write_rows(&self, rows: &[RawRow]) -> Result<()> {
        self.layout.write_rows(&mut self.inner.write().unwrap(), rows);
        self.save()
    }
}
