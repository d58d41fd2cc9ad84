use serde::Serialize;

use crate::core::CellMatrix;
use crate::extraction::build_headers;

/// The unprocessed view: merged header names and every data row as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Counts shown after a workbook is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub data_rows: usize,
    pub columns: usize,
}

impl RawTable {
    pub fn from_matrix(matrix: &CellMatrix, first_data_row: usize) -> Self {
        let headers = build_headers(matrix);
        let rows = (first_data_row..=matrix.row_count())
            .map(|row| {
                (1..=matrix.col_count())
                    .map(|col| matrix.text(row, col))
                    .collect()
            })
            .collect();
        Self { headers, rows }
    }

    pub fn summary(&self) -> LoadSummary {
        LoadSummary {
            data_rows: self.rows.len(),
            columns: self.headers.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_raw_table_keeps_all_columns() {
        let matrix = CellMatrix::from_rows(vec![
            vec!["Exp".into(), "Ana".into(), CellValue::Empty],
            vec![CellValue::Empty, "Ruiz".into()],
            vec!["E-1".into(), "01/02/2025".into(), CellValue::Int(4)],
        ]);

        let table = RawTable::from_matrix(&matrix, 3);
        assert_eq!(table.headers, vec!["Exp", "Ana Ruiz", "Columna3"]);
        assert_eq!(table.rows, vec![vec!["E-1", "01/02/2025", "4"]]);
        assert_eq!(
            table.summary(),
            LoadSummary {
                data_rows: 1,
                columns: 3
            }
        );
    }

    #[test]
    fn test_raw_table_without_data_rows() {
        let matrix = CellMatrix::from_text_rows(vec![vec!["Exp"], vec!["x"]]);
        let table = RawTable::from_matrix(&matrix, 3);
        assert!(table.rows.is_empty());
        assert_eq!(table.summary().columns, 1);
    }
}
