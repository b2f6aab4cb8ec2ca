//! A minimal workbook model: named sheets with sparse string cell grids.
//!
//! Just enough document to host the hidden settings table and to validate
//! scope tags against. Cell contents are plain strings; typed rendering
//! lives in `cellstash-core`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sheet visibility tri-state, mirroring the spreadsheet convention.
///
/// `VeryHidden` sheets are not reachable through ordinary sheet navigation
/// in a host UI; this is the flag the settings sheet is created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SheetVisibility {
    #[default]
    Visible,
    Hidden,
    VeryHidden,
}

/// One sheet: a name, a visibility flag, and a sparse row -> col -> cell map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub visibility: SheetVisibility,
    cells: BTreeMap<u32, BTreeMap<u32, String>>,
}

impl Sheet {
    /// Create an empty visible sheet.
    pub fn new(name: impl Into<String>) -> Self {
        Sheet {
            name: name.into(),
            visibility: SheetVisibility::Visible,
            cells: BTreeMap::new(),
        }
    }

    /// The cell at (row, col), if set.
    pub fn cell(&self, row: u32, col: u32) -> Option<&str> {
        self.cells.get(&row).and_then(|r| r.get(&col)).map(String::as_str)
    }

    /// Set the cell at (row, col). An empty string clears the cell.
    pub fn set_cell(&mut self, row: u32, col: u32, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            if let Some(r) = self.cells.get_mut(&row) {
                r.remove(&col);
                if r.is_empty() {
                    self.cells.remove(&row);
                }
            }
        } else {
            self.cells.entry(row).or_default().insert(col, value);
        }
    }

    /// Remove every cell.
    pub fn clear_cells(&mut self) {
        self.cells.clear();
    }

    /// Iterate populated rows in ascending row order.
    pub fn rows(&self) -> impl Iterator<Item = (u32, &BTreeMap<u32, String>)> {
        self.cells.iter().map(|(row, cols)| (*row, cols))
    }
}

/// A workbook: an ordered list of sheets and an active-sheet selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    sheets: Vec<Sheet>,
    active: Option<usize>,
}

impl Workbook {
    /// An empty workbook with no sheets.
    pub fn new() -> Self {
        Workbook::default()
    }

    /// A workbook with the given visible sheets; the first becomes active.
    pub fn with_sheets<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sheets: Vec<Sheet> = names.into_iter().map(Sheet::new).collect();
        let active = if sheets.is_empty() { None } else { Some(0) };
        Workbook { sheets, active }
    }

    /// True if a sheet with this name exists (any visibility).
    pub fn has_sheet(&self, name: &str) -> bool {
        self.sheets.iter().any(|s| s.name == name)
    }

    /// Append a new visible sheet. Returns false if the name is taken.
    pub fn add_sheet(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.has_sheet(&name) {
            return false;
        }
        self.sheets.push(Sheet::new(name));
        if self.active.is_none() {
            self.active = Some(self.sheets.len() - 1);
        }
        true
    }

    /// Look up a sheet by name, creating it with the given visibility if
    /// absent. A freshly created sheet never becomes the active selection.
    pub fn ensure_sheet(&mut self, name: &str, visibility: SheetVisibility) -> &mut Sheet {
        if let Some(idx) = self.sheets.iter().position(|s| s.name == name) {
            return &mut self.sheets[idx];
        }
        let mut sheet = Sheet::new(name);
        sheet.visibility = visibility;
        self.sheets.push(sheet);
        self.sheets.last_mut().unwrap()
    }

    /// The named sheet, if present.
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Mutable access to the named sheet.
    pub fn sheet_mut(&mut self, name: &str) -> Option<&mut Sheet> {
        self.sheets.iter_mut().find(|s| s.name == name)
    }

    /// Names of all sheets, in workbook order.
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }

    /// The name of the active sheet, if any.
    pub fn active_sheet(&self) -> Option<&str> {
        self.active
            .and_then(|idx| self.sheets.get(idx))
            .map(|s| s.name.as_str())
    }

    /// Select the named sheet. Returns false if it does not exist.
    pub fn set_active(&mut self, name: &str) -> bool {
        match self.sheets.iter().position(|s| s.name == name) {
            Some(idx) => {
                self.active = Some(idx);
                true
            }
            None => false,
        }
    }
}
