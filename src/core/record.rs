use chrono::NaiveDate;
use serde::Serialize;

/// One row of the aging report: a case cell under a reviewer column that
/// carried at least a resolvable assignment date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRecord {
    pub reviewer_name: String,
    /// Workflow stage in effect when the row was scanned.
    pub stage: String,
    /// Verbatim source cell text.
    pub case_text: String,
    pub assignment_date: NaiveDate,
    /// Whole days since assignment. Negative for future dates.
    pub days_with_reviewer: i64,
    pub sector_date: Option<NaiveDate>,
    /// Present exactly when `sector_date` is present.
    pub days_in_sector: Option<i64>,
    /// 1-based worksheet row the record came from.
    pub source_row: usize,
    /// 1-based worksheet column the record came from.
    pub source_column: usize,
}

/// Per-reviewer aggregate shown under the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewerSummary {
    pub reviewer_name: String,
    pub cases: usize,
    pub max_days_with_reviewer: i64,
    pub cases_with_sector_date: usize,
}
