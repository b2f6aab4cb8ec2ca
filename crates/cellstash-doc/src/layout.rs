//! Layout of the hidden settings table inside a workbook.
//!
//! The table lives in a reserved sheet created on demand with the very
//! hidden flag. The first rows are reserved for internal flags and stay
//! blank; data rows follow, three columns wide.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::model::{SheetVisibility, Workbook};

/// Reserved name of the settings sheet.
pub const STORE_SHEET_NAME: &str = "cstashstor";

/// First data row. Rows 0 and 1 are reserved for internal flags.
pub const DATA_START_ROW: u32 = 2;

/// Column holding the scope tag (empty cell = global scope).
const COL_SCOPE: u32 = 0;
/// Column holding the key.
const COL_KEY: u32 = 1;
/// Column holding the rendered value.
const COL_VALUE: u32 = 2;

/// One row of the settings table, as raw cell strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// Scope tag; empty string means the global scope.
    pub scope: String,
    /// The key.
    pub key: String,
    /// The value in its rendered string form.
    pub cell: String,
}

/// Where the settings table lives and where its data starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreLayout {
    /// Name of the reserved sheet.
    pub sheet_name: String,
    /// Row index of the first data row.
    pub data_start_row: u32,
}

impl Default for StoreLayout {
    fn default() -> Self {
        StoreLayout {
            sheet_name: STORE_SHEET_NAME.to_string(),
            data_start_row: DATA_START_ROW,
        }
    }
}

impl StoreLayout {
    /// Read every settings row from the workbook.
    ///
    /// Returns an empty vector when the settings sheet does not exist yet.
    /// Rows above the data offset and rows without a key are skipped.
    pub fn read_rows(&self, workbook: &Workbook) -> Vec<RawRow> {
        let Some(sheet) = workbook.sheet(&self.sheet_name) else {
            return Vec::new();
        };
        let mut rows = Vec::new();
        for (row, cols) in sheet.rows() {
            if row < self.data_start_row {
                continue;
            }
            let Some(key) = cols.get(&COL_KEY) else {
                continue;
            };
            rows.push(RawRow {
                scope: cols.get(&COL_SCOPE).cloned().unwrap_or_default(),
                key: key.clone(),
                cell: cols.get(&COL_VALUE).cloned().unwrap_or_default(),
            });
        }
        trace!(rows = rows.len(), sheet = %self.sheet_name, "read settings table");
        rows
    }

    /// Rewrite the settings table wholesale.
    ///
    /// Creates the sheet very-hidden if absent, clears every existing cell
    /// (the reserved flag rows stay blank), then writes one row per entry
    /// starting at the data offset.
    pub fn write_rows(&self, workbook: &mut Workbook, rows: &[RawRow]) {
        let sheet = workbook.ensure_sheet(&self.sheet_name, SheetVisibility::VeryHidden);
        sheet.clear_cells();
        for (i, row) in rows.iter().enumerate() {
            let r = self.data_start_row + i as u32;
            if !row.scope.is_empty() {
                sheet.set_cell(r, COL_SCOPE, row.scope.clone());
            }
            sheet.set_cell(r, COL_KEY, row.key.clone());
            sheet.set_cell(r, COL_VALUE, row.cell.clone());
        }
        trace!(rows = rows.len(), sheet = %self.sheet_name, "rewrote settings table");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(scope: &str, key: &str, cell: &str) -> RawRow {
        RawRow {
            scope: scope.to_string(),
            key: key.to_string(),
            cell: cell.to_string(),
        }
    }

    #[test]
    fn test_write_creates_very_hidden_sheet() {
        let mut wb = Workbook::with_sheets(["Sheet1"]);
        let layout = StoreLayout::default();
        layout.write_rows(&mut wb, &[row("", "k", "i:1")]);

        let sheet = wb.sheet(STORE_SHEET_NAME).unwrap();
        assert_eq!(sheet.visibility, SheetVisibility::VeryHidden);
        assert_eq!(sheet.cell(DATA_START_ROW, 1), Some("k"));
        assert_eq!(sheet.cell(DATA_START_ROW, 2), Some("i:1"));
        // Reserved flag rows stay blank.
        assert_eq!(sheet.cell(0, 0), None);
        assert_eq!(sheet.cell(1, 0), None);
    }

    #[test]
    fn test_read_write_roundtrip() {
        let mut wb = Workbook::new();
        let layout = StoreLayout::default();
        let rows = vec![
            row("", "alpha", "i:1"),
            row("Sheet1", "beta", "b:true"),
            row("Sheet1", "gamma", "s:hi"),
        ];
        layout.write_rows(&mut wb, &rows);
        assert_eq!(layout.read_rows(&wb), rows);
    }

    #[test]
    fn test_rewrite_drops_stale_rows() {
        let mut wb = Workbook::new();
        let layout = StoreLayout::default();
        layout.write_rows(&mut wb, &[row("", "a", "i:1"), row("", "b", "i:2")]);
        layout.write_rows(&mut wb, &[row("", "a", "i:9")]);
        assert_eq!(layout.read_rows(&wb), vec![row("", "a", "i:9")]);
    }

    #[test]
    fn test_read_missing_sheet_is_empty() {
        let wb = Workbook::new();
        assert!(StoreLayout::default().read_rows(&wb).is_empty());
    }

    #[test]
    fn test_rows_above_offset_ignored() {
        let mut wb = Workbook::new();
        let layout = StoreLayout::default();
        layout.write_rows(&mut wb, &[row("", "k", "i:1")]);
        // Scribble into a reserved row; reads must not pick it up.
        wb.sheet_mut(STORE_SHEET_NAME)
            .unwrap()
            .set_cell(0, COL_KEY, "flag");
        assert_eq!(layout.read_rows(&wb), vec![row("", "k", "i:1")]);
    }
}
