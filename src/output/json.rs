use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use crate::core::{ReportRecord, ReviewerSummary};
use crate::report::{LoadSummary, RawTable, Tablero};

/// Record shape consumed by downstream tooling. Keys are PascalCase and
/// dates are pre-formatted strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportRowView {
    pub reviewer_name: String,
    pub stage: String,
    pub case_text: String,
    pub assignment_date: String,
    pub days_with_reviewer: i64,
    pub sector_date: Option<String>,
    pub days_in_sector: Option<i64>,
}

impl ReportRowView {
    pub fn from_record(record: &ReportRecord, date_format: &str) -> Self {
        let format_date = |date: NaiveDate| date.format(date_format).to_string();
        Self {
            reviewer_name: record.reviewer_name.clone(),
            stage: record.stage.clone(),
            case_text: record.case_text.clone(),
            assignment_date: format_date(record.assignment_date),
            days_with_reviewer: record.days_with_reviewer,
            sector_date: record.sector_date.map(format_date),
            days_in_sector: record.days_in_sector,
        }
    }
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    sheet: &'a str,
    generated_at: String,
    records: Vec<ReportRowView>,
    reviewers: Vec<ReviewerSummary>,
}

#[derive(Serialize)]
struct RawDocument<'a> {
    summary: LoadSummary,
    headers: &'a [String],
    rows: &'a [Vec<String>],
}

pub fn report_to_json(tablero: &Tablero, date_format: &str) -> Result<String> {
    let document = ReportDocument {
        sheet: &tablero.sheet,
        generated_at: tablero.generated_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        records: tablero
            .records
            .iter()
            .map(|record| ReportRowView::from_record(record, date_format))
            .collect(),
        reviewers: tablero.summaries(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

pub fn raw_to_json(table: &RawTable) -> Result<String> {
    let document = RawDocument {
        summary: table.summary(),
        headers: &table.headers,
        rows: &table.rows,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn sample_record() -> ReportRecord {
        ReportRecord {
            reviewer_name: "Ana García".into(),
            stage: "REVISIÓN".into(),
            case_text: "EXP 12 03/01/24 al 15/2".into(),
            assignment_date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            days_with_reviewer: 40,
            sector_date: NaiveDate::from_ymd_opt(2025, 2, 15),
            days_in_sector: Some(12),
            source_row: 3,
            source_column: 3,
        }
    }

    #[test]
    fn test_row_view_uses_pascal_case_and_display_format() {
        let view = ReportRowView::from_record(&sample_record(), "%d-%m-%y");
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(
            value,
            json!({
                "ReviewerName": "Ana García",
                "Stage": "REVISIÓN",
                "CaseText": "EXP 12 03/01/24 al 15/2",
                "AssignmentDate": "03-01-24",
                "DaysWithReviewer": 40,
                "SectorDate": "15-02-25",
                "DaysInSector": 12
            })
        );
    }

    #[test]
    fn test_absent_sector_serializes_as_null() {
        let mut record = sample_record();
        record.sector_date = None;
        record.days_in_sector = None;
        let value = serde_json::to_value(ReportRowView::from_record(&record, "%d-%m-%y")).unwrap();
        assert_eq!(value["SectorDate"], Value::Null);
        assert_eq!(value["DaysInSector"], Value::Null);
    }

    #[test]
    fn test_report_document_lists_reviewers() {
        let tablero = Tablero {
            sheet: "DD".into(),
            generated_at: NaiveDate::from_ymd_opt(2025, 2, 27)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            records: vec![sample_record()],
        };
        let value: Value = serde_json::from_str(&report_to_json(&tablero, "%d/%m/%Y").unwrap()).unwrap();
        assert_eq!(value["sheet"], "DD");
        assert_eq!(value["generated_at"], "2025-02-27T09:00:00");
        assert_eq!(value["records"][0]["AssignmentDate"], "03/01/2024");
        assert_eq!(value["reviewers"][0]["cases"], 1);
    }

    #[test]
    fn test_raw_document_keeps_duplicate_headers() {
        let table = RawTable {
            headers: vec!["Ana".into(), "Ana".into()],
            rows: vec![vec!["x".into(), "".into()]],
        };
        let value: Value = serde_json::from_str(&raw_to_json(&table).unwrap()).unwrap();
        assert_eq!(value["headers"], json!(["Ana", "Ana"]));
        assert_eq!(value["summary"]["data_rows"], 1);
        assert_eq!(value["rows"][0][1], "");
    }
}
