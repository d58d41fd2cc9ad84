// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod env;
pub mod errors;
pub mod extraction;
pub mod formatting;
pub mod io;
pub mod output;
pub mod report;

// Re-export commonly used types
pub use crate::core::{CellMatrix, CellValue, ReportRecord, ReviewerSummary};

pub use crate::config::{SheetLayout, TableroConfig};

pub use crate::env::{Clock, FixedClock, SystemClock};

pub use crate::errors::{Result, TableroError};

pub use crate::extraction::{build_headers, DateExtractor, ExtractedDates, StatusTracker};

pub use crate::io::{load_worksheet, MemoryWorkbook, SheetLoad, WorkbookSource, XlsxWorkbook};

pub use crate::report::{
    generate, report_from_load, summarize_by_reviewer, RawTable, ReportBuilder, SheetReport,
    Tablero,
};
