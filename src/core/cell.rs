use chrono::NaiveDateTime;

/// A single scalar read from a worksheet cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    Error(String),
}

impl CellValue {
    /// Text form of the scalar. Absent cells yield an empty string.
    ///
    /// Date cells are rendered as `dd/mm/yyyy` so that dates typed as real
    /// spreadsheet dates flow through the same extraction as typed text.
    pub fn text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(s) => s.clone(),
            Self::Int(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Bool(true) => "TRUE".into(),
            Self::Bool(false) => "FALSE".into(),
            Self::DateTime(dt) => dt.format("%d/%m/%Y").to_string(),
            Self::Error(e) => format!("#ERR({e})"),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// True for absent cells and cells whose text is only whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Self::Empty
        } else {
            Self::Text(s.to_string())
        }
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        if s.is_empty() {
            Self::Empty
        } else {
            Self::Text(s)
        }
    }
}

/// Read-only grid of cell values addressed 1-based, anchored at A1.
///
/// Rows may be ragged on construction; they are padded with `Empty` so every
/// row has `col_count` cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellMatrix {
    rows: Vec<Vec<CellValue>>,
    col_count: usize,
}

impl CellMatrix {
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        let col_count = rows.iter().map(Vec::len).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(col_count, CellValue::Empty);
                row
            })
            .collect();
        Self { rows, col_count }
    }

    /// Build a matrix of text cells. Empty strings become absent cells.
    pub fn from_text_rows<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_rows(
            rows.into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|s| CellValue::from(s.as_ref()))
                        .collect()
                })
                .collect(),
        )
    }

    /// `(row_count, col_count)`, or `None` when the sheet has no populated cells.
    pub fn dimension(&self) -> Option<(usize, usize)> {
        let populated = self
            .rows
            .iter()
            .any(|row| row.iter().any(|cell| !cell.is_empty()));
        populated.then(|| (self.row_count(), self.col_count()))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.col_count
    }

    /// Cell at `(row, col)`, 1-based. Out-of-range addresses read as empty.
    pub fn get(&self, row: usize, col: usize) -> &CellValue {
        static EMPTY: CellValue = CellValue::Empty;
        if row == 0 || col == 0 {
            return &EMPTY;
        }
        self.rows
            .get(row - 1)
            .and_then(|r| r.get(col - 1))
            .unwrap_or(&EMPTY)
    }

    pub fn text(&self, row: usize, col: usize) -> String {
        self.get(row, col).text()
    }
}
