//! Report assembly: the row scan, per-reviewer summaries and the raw view.
//!
//! [`generate`] runs the whole pipeline against any [`WorkbookSource`]:
//! load the worksheet, build the raw passthrough table, scan rows into
//! aging records and sort them.

pub mod builder;
pub mod raw;
pub mod summary;

pub use builder::{days_since, sort_by_days_with_reviewer, ReportBuilder};
pub use raw::{LoadSummary, RawTable};
pub use summary::summarize_by_reviewer;

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::info;

use crate::config::TableroConfig;
use crate::core::{ReportRecord, ReviewerSummary};
use crate::env::Clock;
use crate::errors::Result;
use crate::io::{load_worksheet, SheetLoad, WorkbookSource};

/// The aging report for one worksheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tablero {
    pub sheet: String,
    pub generated_at: NaiveDateTime,
    /// Sorted by `days_with_reviewer`, largest first.
    pub records: Vec<ReportRecord>,
}

impl Tablero {
    pub fn summaries(&self) -> Vec<ReviewerSummary> {
        summarize_by_reviewer(&self.records)
    }

    /// Keep only the first `n` records.
    pub fn truncate(&mut self, n: usize) {
        self.records.truncate(n);
    }
}

/// Result of running the pipeline on a workbook.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetReport {
    Ready { raw: RawTable, tablero: Tablero },
    /// The worksheet exists but holds no cells.
    Empty,
}

/// Load the configured worksheet from `source` and build both views.
pub fn generate<S: WorkbookSource + ?Sized>(
    source: &mut S,
    config: &TableroConfig,
    clock: &dyn Clock,
) -> Result<SheetReport> {
    let builder = ReportBuilder::from_config(config)?;
    let load = load_worksheet(source, &config.sheet.name)?;
    Ok(build_views(load, &builder, &config.sheet.name, clock))
}

/// Build both views from a worksheet that was already materialized, so the
/// workbook handle can be released before the scan.
pub fn report_from_load(
    load: SheetLoad,
    config: &TableroConfig,
    clock: &dyn Clock,
) -> Result<SheetReport> {
    let builder = ReportBuilder::from_config(config)?;
    Ok(build_views(load, &builder, &config.sheet.name, clock))
}

fn build_views(
    load: SheetLoad,
    builder: &ReportBuilder,
    sheet: &str,
    clock: &dyn Clock,
) -> SheetReport {
    let matrix = match load {
        SheetLoad::Ready(matrix) => matrix,
        SheetLoad::Empty => return SheetReport::Empty,
    };

    let raw = RawTable::from_matrix(&matrix, builder.layout().first_data_row);
    let load = raw.summary();
    info!(
        sheet,
        data_rows = load.data_rows,
        columns = load.columns,
        "worksheet loaded"
    );

    let tablero = Tablero {
        sheet: sheet.to_string(),
        generated_at: clock.now(),
        records: builder.build(&matrix, clock),
    };

    SheetReport::Ready { raw, tablero }
}
