use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use super::markdown::REPORT_HEADERS;
use crate::formatting::{AgeFormatter, AgeLevel, FormattingConfig};
use crate::report::{RawTable, Tablero};

fn new_table(formatting: FormattingConfig) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if formatting.color.should_use_color() {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    table
}

fn days_cell(days: i64, formatting: FormattingConfig) -> Cell {
    let cell = Cell::new(days).set_alignment(CellAlignment::Right);
    match formatting.thresholds.level(days) {
        AgeLevel::Alert => cell.fg(Color::Red).add_attribute(Attribute::Bold),
        AgeLevel::Warn => cell.fg(Color::Yellow),
        AgeLevel::Ok => cell.fg(Color::Green),
    }
}

pub fn report_to_terminal(tablero: &Tablero, date_format: &str, formatting: FormattingConfig) -> String {
    let formatter = AgeFormatter::new(formatting);
    let mut out = format!(
        "{} {}\n",
        formatter.header(&format!("Tablero: {}", tablero.sheet)),
        formatter.dim(&format!("({})", tablero.generated_at.format("%Y-%m-%d %H:%M")))
    );

    if tablero.records.is_empty() {
        out.push_str("Sin expedientes con fecha de asignación.\n");
        return out;
    }

    let mut table = new_table(formatting);
    table.set_header(REPORT_HEADERS.to_vec());
    for record in &tablero.records {
        table.add_row(vec![
            Cell::new(&record.reviewer_name),
            Cell::new(&record.stage),
            Cell::new(record.case_text.trim()),
            Cell::new(record.assignment_date.format(date_format)),
            days_cell(record.days_with_reviewer, formatting),
            Cell::new(
                record
                    .sector_date
                    .map(|d| d.format(date_format).to_string())
                    .unwrap_or_default(),
            ),
            match record.days_in_sector {
                Some(days) => days_cell(days, formatting),
                None => Cell::new(""),
            },
        ]);
    }
    out.push_str(&table.to_string());
    out.push('\n');

    let mut summary = new_table(formatting);
    summary.set_header(vec!["Responsable", "Expedientes", "Máx. días", "Con fecha en sector"]);
    for reviewer in tablero.summaries() {
        summary.add_row(vec![
            Cell::new(&reviewer.reviewer_name),
            Cell::new(reviewer.cases).set_alignment(CellAlignment::Right),
            days_cell(reviewer.max_days_with_reviewer, formatting),
            Cell::new(reviewer.cases_with_sector_date).set_alignment(CellAlignment::Right),
        ]);
    }
    out.push('\n');
    out.push_str(&formatter.header("Por responsable"));
    out.push('\n');
    out.push_str(&summary.to_string());
    out.push('\n');
    out.push_str(&formatter.dim(&format!("{} expedientes", tablero.records.len())));
    out
}

pub fn raw_to_terminal(table: &RawTable, formatting: FormattingConfig) -> String {
    let formatter = AgeFormatter::new(formatting);
    let summary = table.summary();
    let mut out = formatter.dim(&format!(
        "{} filas de datos, {} columnas",
        summary.data_rows, summary.columns
    ));
    out.push('\n');

    let mut view = new_table(formatting);
    view.set_header(table.headers.clone());
    for row in &table.rows {
        view.add_row(row.clone());
    }
    out.push_str(&view.to_string());
    out
}
