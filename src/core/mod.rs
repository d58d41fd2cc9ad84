//! Data model shared by the ingestion, extraction and report layers.

pub mod cell;
pub mod record;

pub use cell::{CellMatrix, CellValue};
pub use record::{ReportRecord, ReviewerSummary};
