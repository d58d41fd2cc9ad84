//! Spreadsheet files read through calamine (`.xlsx`, `.xlsm`, `.xls`, `.ods`).

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::workbook::{load_worksheet, SheetLoad, WorkbookSource};
use crate::core::{CellMatrix, CellValue};
use crate::errors::{Result, TableroError};

pub struct XlsxWorkbook {
    path: PathBuf,
    sheets: Sheets<BufReader<File>>,
}

impl XlsxWorkbook {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let sheets = open_workbook_auto(path).map_err(|e| TableroError::workbook(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            sheets,
        })
    }
}

impl WorkbookSource for XlsxWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    fn read_sheet(&mut self, name: &str) -> Result<Option<CellMatrix>> {
        if !self.sheets.sheet_names().iter().any(|n| n == name) {
            return Ok(None);
        }
        let range = self
            .sheets
            .worksheet_range(name)
            .map_err(|e| TableroError::workbook(&self.path, e))?;
        Ok(Some(range_to_matrix(&range)))
    }
}

/// Open the file, materialize one worksheet and close the file again.
pub fn read_workbook_sheet(path: &Path, sheet: &str) -> Result<SheetLoad> {
    let mut workbook = XlsxWorkbook::open(path)?;
    load_worksheet(&mut workbook, sheet)
}

/// Copy a calamine range into a matrix anchored at A1, so row and column
/// numbers match what the spreadsheet shows.
pub(crate) fn range_to_matrix(range: &Range<Data>) -> CellMatrix {
    let (Some(start), Some(end)) = (range.start(), range.end()) else {
        return CellMatrix::default();
    };

    let height = end.0 as usize + 1;
    let width = end.1 as usize + 1;
    let mut rows = vec![vec![CellValue::Empty; width]; height];

    for (r, row) in range.rows().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            rows[start.0 as usize + r][start.1 as usize + c] = convert_cell(cell);
        }
    }

    CellMatrix::from_rows(rows)
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::from(s.clone()),
        Data::Int(n) => CellValue::Int(*n),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        // `as_datetime` honours the workbook's 1900 or 1904 date system.
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(CellValue::DateTime)
            .unwrap_or(CellValue::Float(dt.as_f64())),
        Data::DateTimeIso(s) => parse_iso_datetime(s)
            .map(CellValue::DateTime)
            .unwrap_or_else(|| CellValue::Text(s.clone())),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Error(format!("{e:?}")),
    }
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    s.parse::<NaiveDateTime>().ok().or_else(|| {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .map(|d| d.and_time(NaiveTime::MIN))
    })
}
