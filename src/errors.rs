//! Error types for tablero operations.
//!
//! Only failures that end a load are represented here. Per-cell problems
//! (unparsable date tokens, columns without a reviewer name) are absorbed
//! inside the report pipeline and never reach this type.
//!
//! # Example
//!
//! ```rust
//! use tablero::errors::TableroError;
//!
//! let err = TableroError::sheet_not_found("DD");
//! assert!(err.is_source_not_found());
//! assert_eq!(err.to_string(), "worksheet 'DD' not found in workbook");
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, TableroError>;

/// Unified error type for tablero operations.
#[derive(Debug, Error)]
pub enum TableroError {
    /// The requested worksheet does not exist in the workbook.
    #[error("worksheet '{sheet}' not found in workbook")]
    SheetNotFound { sheet: String },

    /// The workbook could not be opened or a sheet could not be read.
    #[error("failed to read workbook {}: {message}", path.display())]
    Workbook { path: PathBuf, message: String },

    /// Invalid configuration value or unreadable configuration file.
    #[error("configuration error{}: {message}", path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Rendering or serializing a report failed.
    #[error("failed to render output: {0}")]
    Output(String),

    /// File system errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TableroError {
    /// Create a missing-worksheet error.
    pub fn sheet_not_found(sheet: impl Into<String>) -> Self {
        Self::SheetNotFound {
            sheet: sheet.into(),
        }
    }

    /// Create a workbook read error.
    pub fn workbook(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Workbook {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error without file context.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error tied to a configuration file.
    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// True when the load failed because the worksheet is absent.
    pub fn is_source_not_found(&self) -> bool {
        matches!(self, Self::SheetNotFound { .. })
    }
}

impl From<serde_json::Error> for TableroError {
    fn from(e: serde_json::Error) -> Self {
        Self::Output(e.to_string())
    }
}

impl From<std::fmt::Error> for TableroError {
    fn from(e: std::fmt::Error) -> Self {
        Self::Output(e.to_string())
    }
}
