pub mod workbook;
pub mod xlsx;

pub use workbook::{load_worksheet, MemoryWorkbook, SheetLoad, WorkbookSource};
pub use xlsx::{read_workbook_sheet, XlsxWorkbook};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Write `content` to `path`, creating missing parent directories.
pub fn write_output_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    write_file(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_output_file_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("informes").join("octubre").join("tablero.md");

        write_output_file(&nested, "# Tablero").unwrap();
        assert_eq!(fs::read_to_string(&nested).unwrap(), "# Tablero");
    }

    #[test]
    fn test_write_output_file_in_current_dir_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tablero.json");
        write_output_file(&path, "[]").unwrap();
        assert!(path.exists());
    }
}
