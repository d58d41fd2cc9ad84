//! Column names from the two header rows.
//!
//! Row 1 carries reviewer first names and row 2 their surnames, so a column
//! name is the two joined by a space. Names are not deduplicated; callers
//! address data columns by position.

use crate::core::CellMatrix;

/// Joined and trimmed text of header rows 1 and 2 for `col`. May be empty.
pub fn merged_header(matrix: &CellMatrix, col: usize) -> String {
    let first = matrix.text(1, col);
    let second = matrix.text(2, col);
    format!("{first} {second}").trim().to_string()
}

/// One display name per column, `Columna{N}` where both header cells are blank.
pub fn build_headers(matrix: &CellMatrix) -> Vec<String> {
    (1..=matrix.col_count())
        .map(|col| {
            let name = merged_header(matrix, col);
            if name.is_empty() {
                fallback_column_name(col)
            } else {
                name
            }
        })
        .collect()
}

pub fn fallback_column_name(col: usize) -> String {
    format!("Columna{col}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellValue;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_merges_first_and_last_names() {
        let m = CellMatrix::from_text_rows(vec![
            vec!["Expediente", "", "Ana", "Luis"],
            vec!["", "", "García", ""],
        ]);
        assert_eq!(
            build_headers(&m),
            vec!["Expediente", "Columna2", "Ana García", "Luis"]
        );
    }

    #[test]
    fn test_whitespace_only_headers_fall_back() {
        let m = CellMatrix::from_text_rows(vec![vec!["  "], vec![" "]]);
        assert_eq!(build_headers(&m), vec!["Columna1"]);
        assert_eq!(merged_header(&m, 1), "");
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let m = CellMatrix::from_text_rows(vec![vec!["Ana", "Ana"], vec!["Ruiz", "Ruiz"]]);
        assert_eq!(build_headers(&m), vec!["Ana Ruiz", "Ana Ruiz"]);
    }

    #[test]
    fn test_numeric_headers_use_text_form() {
        let m = CellMatrix::from_rows(vec![vec![CellValue::Int(2024)], vec![CellValue::Empty]]);
        assert_eq!(build_headers(&m), vec!["2024"]);
    }

    #[test]
    fn test_single_header_row_matrix() {
        let m = CellMatrix::from_text_rows(vec![vec!["A", ""]]);
        assert_eq!(build_headers(&m), vec!["A", "Columna2"]);
    }

    proptest! {
        #[test]
        fn prop_one_name_per_column(
            row1 in proptest::collection::vec("[ a-zA-Z]{0,6}", 1..12),
            row2_seed in proptest::collection::vec("[ a-zA-Z]{0,6}", 12),
        ) {
            let row2: Vec<String> = row2_seed.into_iter().take(row1.len()).collect();
            let m = CellMatrix::from_text_rows(vec![row1.clone(), row2.clone()]);
            let headers = build_headers(&m);

            prop_assert_eq!(headers.len(), m.col_count());
            for (i, name) in headers.iter().enumerate() {
                let joined = format!("{} {}", row1[i], row2[i]).trim().to_string();
                if joined.is_empty() {
                    prop_assert_eq!(name, &format!("Columna{}", i + 1));
                } else {
                    prop_assert_eq!(name, &joined);
                }
            }
        }
    }
}
