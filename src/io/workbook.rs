//! Workbook access behind a trait so the pipeline never touches files.

use std::collections::BTreeMap;

use crate::core::CellMatrix;
use crate::errors::{Result, TableroError};

/// A workbook with named worksheets.
pub trait WorkbookSource {
    /// Worksheet names in workbook order.
    fn sheet_names(&self) -> Vec<String>;

    /// Materialize a worksheet. `Ok(None)` when no sheet has that name.
    fn read_sheet(&mut self, name: &str) -> Result<Option<CellMatrix>>;
}

/// Outcome of loading the status worksheet.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetLoad {
    Ready(CellMatrix),
    /// The worksheet exists but has no populated cells.
    Empty,
}

/// Look up `name` in `source`, distinguishing a missing sheet (error) from
/// an empty one (valid, nothing to report).
pub fn load_worksheet<S: WorkbookSource + ?Sized>(source: &mut S, name: &str) -> Result<SheetLoad> {
    let matrix = source
        .read_sheet(name)?
        .ok_or_else(|| TableroError::sheet_not_found(name))?;

    match matrix.dimension() {
        Some((rows, cols)) => {
            log::debug!("Worksheet '{}' spans {} rows x {} columns", name, rows, cols);
            Ok(SheetLoad::Ready(matrix))
        }
        None => Ok(SheetLoad::Empty),
    }
}

/// In-memory workbook for tests and library callers that already hold data.
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkbook {
    order: Vec<String>,
    sheets: BTreeMap<String, CellMatrix>,
}

impl MemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, name: impl Into<String>, matrix: CellMatrix) -> Self {
        self.insert(name, matrix);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, matrix: CellMatrix) {
        let name = name.into();
        if !self.sheets.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.sheets.insert(name, matrix);
    }
}

impl WorkbookSource for MemoryWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.order.clone()
    }

    fn read_sheet(&mut self, name: &str) -> Result<Option<CellMatrix>> {
        Ok(self.sheets.get(name).cloned())
    }
}
