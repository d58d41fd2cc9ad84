use std::fmt::{self, Write};

use crate::report::{RawTable, Tablero};

pub(crate) const REPORT_HEADERS: [&str; 7] = [
    "Responsable",
    "Estado",
    "Expediente",
    "Fecha Asignación",
    "Días con Dictaminante",
    "Fecha en Sector",
    "Días en Sector",
];

/// Pipes and line breaks would split a table cell.
fn escape_cell(text: &str) -> String {
    text.trim()
        .replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace('\n', "<br>")
}

fn write_table_row<I, S>(out: &mut String, cells: I) -> fmt::Result
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    out.push('|');
    for cell in cells {
        write!(out, " {} |", escape_cell(cell.as_ref()))?;
    }
    writeln!(out)
}

fn write_separator(out: &mut String, columns: usize) -> fmt::Result {
    out.push('|');
    for _ in 0..columns {
        out.push_str(" --- |");
    }
    writeln!(out)
}

pub fn report_to_markdown(tablero: &Tablero, date_format: &str) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "# Tablero: {}", tablero.sheet)?;
    writeln!(out)?;
    writeln!(
        out,
        "Generado: {}",
        tablero.generated_at.format("%Y-%m-%d %H:%M")
    )?;
    writeln!(out)?;

    if tablero.records.is_empty() {
        writeln!(out, "_Sin expedientes con fecha de asignación._")?;
        return Ok(out);
    }

    write_table_row(&mut out, REPORT_HEADERS)?;
    write_separator(&mut out, REPORT_HEADERS.len())?;
    for record in &tablero.records {
        write_table_row(
            &mut out,
            [
                record.reviewer_name.clone(),
                record.stage.clone(),
                record.case_text.clone(),
                record.assignment_date.format(date_format).to_string(),
                record.days_with_reviewer.to_string(),
                record
                    .sector_date
                    .map(|d| d.format(date_format).to_string())
                    .unwrap_or_default(),
                record
                    .days_in_sector
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
            ],
        )?;
    }

    writeln!(out)?;
    writeln!(out, "## Por responsable")?;
    writeln!(out)?;
    write_table_row(&mut out, ["Responsable", "Expedientes", "Máx. días", "Con fecha en sector"])?;
    write_separator(&mut out, 4)?;
    for summary in tablero.summaries() {
        write_table_row(
            &mut out,
            [
                summary.reviewer_name,
                summary.cases.to_string(),
                summary.max_days_with_reviewer.to_string(),
                summary.cases_with_sector_date.to_string(),
            ],
        )?;
    }

    Ok(out)
}

pub fn raw_to_markdown(table: &RawTable) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let summary = table.summary();
    writeln!(
        out,
        "_{} filas de datos, {} columnas_",
        summary.data_rows, summary.columns
    )?;
    writeln!(out)?;
    if table.headers.is_empty() {
        return Ok(out);
    }

    write_table_row(&mut out, &table.headers)?;
    write_separator(&mut out, table.headers.len())?;
    for row in &table.rows {
        write_table_row(&mut out, row)?;
    }
    Ok(out)
}
