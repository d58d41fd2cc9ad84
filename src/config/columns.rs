use std::ops::RangeInclusive;

use crate::errors::{Result, TableroError};

/// 1-based index of a column given by letters (`"A"` = 1, `"AA"` = 27) or
/// by a plain number (`"16"`).
pub fn column_index(reference: &str) -> Result<usize> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(TableroError::config("empty column reference"));
    }

    if reference.bytes().all(|b| b.is_ascii_digit()) {
        return match reference.parse::<usize>() {
            Ok(0) | Err(_) => Err(TableroError::config(format!(
                "invalid column number '{reference}'"
            ))),
            Ok(n) => Ok(n),
        };
    }

    if !reference.bytes().all(|b| b.is_ascii_alphabetic()) || reference.len() > 3 {
        return Err(TableroError::config(format!(
            "invalid column reference '{reference}'"
        )));
    }

    Ok(reference
        .bytes()
        .map(|b| b.to_ascii_uppercase())
        .fold(0usize, |acc, b| acc * 26 + (b - b'A') as usize + 1))
}

/// Spreadsheet letters for a 1-based column index.
pub fn column_letters(mut index: usize) -> String {
    let mut letters = Vec::new();
    while index > 0 {
        let rem = (index - 1) % 26;
        letters.push(b'A' + rem as u8);
        index = (index - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Inclusive column span such as `"C:O"`. A single reference is a one-column span.
pub fn column_span(reference: &str) -> Result<RangeInclusive<usize>> {
    let (first, last) = match reference.split_once(':') {
        Some((first, last)) => (column_index(first)?, column_index(last)?),
        None => {
            let col = column_index(reference)?;
            (col, col)
        }
    };
    if first > last {
        return Err(TableroError::config(format!(
            "column span '{reference}' runs backwards"
        )));
    }
    Ok(first..=last)
}

/// Where things live on the worksheet, resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    /// First row scanned for cases. Rows 1 and 2 hold the headers.
    pub first_data_row: usize,
    pub reviewer_columns: RangeInclusive<usize>,
    pub status_column: usize,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            first_data_row: 3,
            reviewer_columns: 3..=15,
            status_column: 16,
        }
    }
}

impl SheetLayout {
    pub fn new(
        first_data_row: usize,
        reviewer_columns: RangeInclusive<usize>,
        status_column: usize,
    ) -> Result<Self> {
        if first_data_row < 3 {
            return Err(TableroError::config(format!(
                "first_data_row must be 3 or later (rows 1-2 are headers), got {first_data_row}"
            )));
        }
        if reviewer_columns.contains(&status_column) {
            return Err(TableroError::config(format!(
                "status column {} lies inside the reviewer columns {}:{}",
                column_letters(status_column),
                column_letters(*reviewer_columns.start()),
                column_letters(*reviewer_columns.end()),
            )));
        }
        Ok(Self {
            first_data_row,
            reviewer_columns,
            status_column,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_index_letters() {
        assert_eq!(column_index("A").unwrap(), 1);
        assert_eq!(column_index("p").unwrap(), 16);
        assert_eq!(column_index("Z").unwrap(), 26);
        assert_eq!(column_index("AA").unwrap(), 27);
        assert_eq!(column_index(" AB ").unwrap(), 28);
    }

    #[test]
    fn test_column_index_numbers() {
        assert_eq!(column_index("16").unwrap(), 16);
        assert!(column_index("0").is_err());
    }

    #[test]
    fn test_column_index_rejects_garbage() {
        assert!(column_index("").is_err());
        assert!(column_index("C3").is_err());
        assert!(column_index("Ñ").is_err());
        assert!(column_index("ABCD").is_err());
    }

    #[test]
    fn test_column_letters_inverse() {
        for col in [1, 3, 15, 16, 26, 27, 52, 703] {
            assert_eq!(column_index(&column_letters(col)).unwrap(), col);
        }
        assert_eq!(column_letters(16), "P");
    }

    #[test]
    fn test_column_span() {
        assert_eq!(column_span("C:O").unwrap(), 3..=15);
        assert_eq!(column_span("D").unwrap(), 4..=4);
        assert!(column_span("O:C").is_err());
    }

    #[test]
    fn test_layout_validation() {
        assert_eq!(SheetLayout::new(3, 3..=15, 16).unwrap(), SheetLayout::default());
        assert!(SheetLayout::new(2, 3..=15, 16).is_err());
        assert!(SheetLayout::new(4, 3..=15, 10).is_err());
        assert!(SheetLayout::new(4, 3..=15, 1).is_ok());
    }
}
