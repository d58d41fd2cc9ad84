use std::collections::HashMap;

use crate::core::{ReportRecord, ReviewerSummary};

/// Aggregate records per reviewer, in order of first appearance.
///
/// On a sorted report that puts the reviewer holding the oldest case first.
pub fn summarize_by_reviewer(records: &[ReportRecord]) -> Vec<ReviewerSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<ReviewerSummary> = Vec::new();

    for record in records {
        let slot = *index
            .entry(record.reviewer_name.as_str())
            .or_insert_with(|| {
                summaries.push(ReviewerSummary {
                    reviewer_name: record.reviewer_name.clone(),
                    cases: 0,
                    max_days_with_reviewer: record.days_with_reviewer,
                    cases_with_sector_date: 0,
                });
                summaries.len() - 1
            });

        let summary = &mut summaries[slot];
        summary.cases += 1;
        summary.max_days_with_reviewer = summary
            .max_days_with_reviewer
            .max(record.days_with_reviewer);
        if record.sector_date.is_some() {
            summary.cases_with_sector_date += 1;
        }
    }

    summaries
}
