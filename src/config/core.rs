use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::columns::{column_index, column_span, SheetLayout};
use crate::errors::{Result, TableroError};
use crate::extraction::dates::DEFAULT_TWO_DIGIT_YEAR_PIVOT;
use crate::extraction::status::DEFAULT_STAGES;
use crate::output::OutputFormat;

/// Root configuration structure for tablero
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TableroConfig {
    /// Worksheet selection and data start row
    #[serde(default)]
    pub sheet: SheetConfig,

    /// Reviewer and status column placement
    #[serde(default)]
    pub columns: ColumnsConfig,

    /// Workflow stage labels
    #[serde(default)]
    pub stages: StagesConfig,

    /// Date parsing and display
    #[serde(default)]
    pub dates: DatesConfig,

    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SheetConfig {
    pub name: String,
    pub first_data_row: usize,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            name: "DD".into(),
            first_data_row: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColumnsConfig {
    /// Inclusive span of reviewer columns, e.g. `"C:O"`
    pub reviewers: String,
    /// Column naming the workflow stage, e.g. `"P"`
    pub status: String,
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            reviewers: "C:O".into(),
            status: "P".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StagesConfig {
    pub labels: Vec<String>,
    /// Stage assumed before any status cell names one
    pub initial: String,
}

impl Default for StagesConfig {
    fn default() -> Self {
        Self {
            labels: DEFAULT_STAGES.iter().map(|s| s.to_string()).collect(),
            initial: DEFAULT_STAGES[0].into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatesConfig {
    /// chrono format string used when printing dates
    pub display_format: String,
    /// Two-digit years below the pivot are 20xx, others 19xx
    pub two_digit_year_pivot: u32,
}

impl Default for DatesConfig {
    fn default() -> Self {
        Self {
            display_format: "%d-%m-%y".into(),
            two_digit_year_pivot: DEFAULT_TWO_DIGIT_YEAR_PIVOT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub default_format: OutputFormat,
    /// Days with reviewer shown as a warning in terminal output
    pub warn_days: i64,
    /// Days with reviewer shown as overdue in terminal output
    pub alert_days: i64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Terminal,
            warn_days: 15,
            alert_days: 30,
        }
    }
}

impl TableroConfig {
    /// Resolve column letters and row numbers into a validated layout.
    pub fn layout(&self) -> Result<SheetLayout> {
        SheetLayout::new(
            self.sheet.first_data_row,
            column_span(&self.columns.reviewers)?,
            column_index(&self.columns.status)?,
        )
    }

    /// Check everything that can be checked without a workbook.
    pub fn validate(&self) -> Result<()> {
        self.layout()?;
        if self.sheet.name.trim().is_empty() {
            return Err(TableroError::config("sheet.name must not be empty"));
        }
        if self.stages.labels.iter().any(|l| l.is_empty()) {
            return Err(TableroError::config("stage labels must not be empty"));
        }
        if self.dates.two_digit_year_pivot > 100 {
            return Err(TableroError::config(format!(
                "dates.two_digit_year_pivot must be between 0 and 100, got {}",
                self.dates.two_digit_year_pivot
            )));
        }
        let format = &self.dates.display_format;
        // Time fields fail here too: the report only has dates to show.
        let mut rendered = String::new();
        if format.trim().is_empty()
            || write!(rendered, "{}", NaiveDate::default().format(format)).is_err()
        {
            return Err(TableroError::config(format!(
                "dates.display_format '{format}' is not a valid date format"
            )));
        }
        if self.output.warn_days > self.output.alert_days {
            return Err(TableroError::config(format!(
                "output.warn_days ({}) must not exceed output.alert_days ({})",
                self.output.warn_days, self.output.alert_days
            )));
        }
        Ok(())
    }
}
