//! Row scan that turns the status grid into aging records.
//!
//! Rows are scanned top to bottom. Each row first updates the workflow stage
//! from the status column, then every reviewer column is checked for a case
//! cell with an assignment date. One row can yield several records, one per
//! reviewer holding a case on that row.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, info_span};

use crate::config::{SheetLayout, TableroConfig};
use crate::core::{CellMatrix, ReportRecord};
use crate::env::Clock;
use crate::errors::Result;
use crate::extraction::dates::DEFAULT_TWO_DIGIT_YEAR_PIVOT;
use crate::extraction::{merged_header, DateExtractor, StatusTracker, DEFAULT_STAGES};

#[derive(Debug, Clone)]
pub struct ReportBuilder {
    layout: SheetLayout,
    stage_labels: Vec<String>,
    initial_stage: String,
    two_digit_year_pivot: u32,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new(SheetLayout::default())
    }
}

impl ReportBuilder {
    pub fn new(layout: SheetLayout) -> Self {
        Self {
            layout,
            stage_labels: DEFAULT_STAGES.iter().map(|s| s.to_string()).collect(),
            initial_stage: DEFAULT_STAGES[0].to_string(),
            two_digit_year_pivot: DEFAULT_TWO_DIGIT_YEAR_PIVOT,
        }
    }

    /// Builder for a validated configuration.
    pub fn from_config(config: &TableroConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.layout()?)
            .with_stages(config.stages.labels.clone(), config.stages.initial.clone())
            .with_two_digit_year_pivot(config.dates.two_digit_year_pivot))
    }

    pub fn with_stages(mut self, labels: Vec<String>, initial: impl Into<String>) -> Self {
        self.stage_labels = labels;
        self.initial_stage = initial.into();
        self
    }

    pub fn with_two_digit_year_pivot(mut self, pivot: u32) -> Self {
        self.two_digit_year_pivot = pivot;
        self
    }

    pub fn layout(&self) -> &SheetLayout {
        &self.layout
    }

    /// Scan `matrix` and return records sorted by days with reviewer, oldest first.
    pub fn build(&self, matrix: &CellMatrix, clock: &dyn Clock) -> Vec<ReportRecord> {
        let _span = info_span!("build_report", rows = matrix.row_count()).entered();

        let now = clock.now();
        let extractor = DateExtractor::new(clock.current_year())
            .with_two_digit_year_pivot(self.two_digit_year_pivot);
        let mut tracker =
            StatusTracker::new(self.stage_labels.clone(), self.initial_stage.clone());

        let last_col = matrix.col_count();
        let reviewers: Vec<(usize, String)> = self
            .layout
            .reviewer_columns
            .clone()
            .filter(|col| *col <= last_col)
            .map(|col| (col, merged_header(matrix, col)))
            .collect();

        let mut records = Vec::new();
        for row in self.layout.first_data_row..=matrix.row_count() {
            let stage = tracker
                .observe(&matrix.text(row, self.layout.status_column))
                .to_string();

            for (col, reviewer) in &reviewers {
                if matrix.get(row, *col).is_blank() {
                    continue;
                }
                let cell = CaseCell {
                    row,
                    col: *col,
                    text: matrix.text(row, *col),
                };
                if let Some(record) = cell.into_record(reviewer, &stage, &extractor, now) {
                    records.push(record);
                }
            }
        }

        sort_by_days_with_reviewer(&mut records);
        debug!(records = records.len(), "report built");
        records
    }
}

struct CaseCell {
    row: usize,
    col: usize,
    text: String,
}

impl CaseCell {
    fn into_record(
        self,
        reviewer: &str,
        stage: &str,
        extractor: &DateExtractor,
        now: NaiveDateTime,
    ) -> Option<ReportRecord> {
        let dates = extractor.extract(&self.text);
        let Some(assignment) = dates.assignment else {
            debug!(row = self.row, col = self.col, "no assignment date in cell");
            return None;
        };

        if reviewer.is_empty() {
            debug!(row = self.row, col = self.col, "dated cell under unnamed column");
            return None;
        }

        Some(ReportRecord {
            reviewer_name: reviewer.to_string(),
            stage: stage.to_string(),
            case_text: self.text,
            assignment_date: assignment,
            days_with_reviewer: days_since(now, assignment),
            sector_date: dates.sector,
            days_in_sector: dates.sector.map(|date| days_since(now, date)),
            source_row: self.row,
            source_column: self.col,
        })
    }
}

/// Whole days from midnight of `date` to `now`, truncated toward zero.
pub fn days_since(now: NaiveDateTime, date: NaiveDate) -> i64 {
    (now - date.and_time(NaiveTime::MIN)).num_days()
}

/// Stable sort, largest `days_with_reviewer` first.
pub fn sort_by_days_with_reviewer(records: &mut [ReportRecord]) {
    records.sort_by(|a, b| b.days_with_reviewer.cmp(&a.days_with_reviewer));
}
