//! Command-line behavior of the `tablero` binary.

use assert_cmd::Command;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn tablero() -> Command {
    let mut cmd = Command::cargo_bin("tablero").unwrap();
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

fn stderr_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stderr).into_owned()
}

/// Status sheet `DD`: reviewer Ana Ruiz in column C, stage REVISIÓN set on
/// row 4 and a real date cell on row 5.
fn write_status_workbook(path: &Path) {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("dd/mm/yyyy");
    let sheet = workbook.add_worksheet().set_name("DD").unwrap();
    sheet.write_string(0, 0, "Expediente").unwrap();
    sheet.write_string(0, 2, "Ana").unwrap();
    sheet.write_string(1, 2, "Ruiz").unwrap();
    sheet.write_string(0, 15, "Estado").unwrap();
    sheet.write_string(2, 0, "EXP-1").unwrap();
    sheet.write_string(3, 15, "REVISIÓN").unwrap();
    let assigned = ExcelDateTime::from_ymd(2025, 10, 1).unwrap();
    sheet
        .write_datetime_with_format(4, 2, &assigned, &date_format)
        .unwrap();
    workbook.save(path).unwrap();
}

fn write_workbook_with_sheet(path: &Path, name: &str, cell: Option<&str>) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet().set_name(name).unwrap();
    if let Some(text) = cell {
        sheet.write_string(0, 0, text).unwrap();
    }
    workbook.save(path).unwrap();
}

#[test]
fn report_json_from_workbook() {
    let dir = TempDir::new().unwrap();
    write_status_workbook(&dir.path().join("estado.xlsx"));

    let assert = tablero()
        .current_dir(dir.path())
        .args(["report", "estado.xlsx", "--format", "json", "--as-of", "2025-10-21"])
        .assert()
        .success();

    let report: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let records = report["records"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["ReviewerName"], "Ana Ruiz");
    assert_eq!(records[0]["Stage"], "REVISIÓN");
    assert_eq!(records[0]["AssignmentDate"], "01-10-25");
    assert_eq!(records[0]["DaysWithReviewer"], 20);
    assert_eq!(records[0]["SectorDate"], Value::Null);
    assert_eq!(report["sheet"], "DD");
}

#[test]
fn report_without_status_sheet_names_it() {
    let dir = TempDir::new().unwrap();
    write_workbook_with_sheet(&dir.path().join("estado.xlsx"), "Hoja1", Some("notas"));

    let assert = tablero()
        .current_dir(dir.path())
        .args(["report", "estado.xlsx"])
        .assert()
        .failure();
    assert!(stderr_of(&assert).contains("worksheet 'DD' not found"));
}

#[test]
fn report_on_empty_status_sheet_warns_and_succeeds() {
    let dir = TempDir::new().unwrap();
    write_workbook_with_sheet(&dir.path().join("estado.xlsx"), "DD", None);

    let assert = tablero()
        .current_dir(dir.path())
        .args(["report", "estado.xlsx"])
        .assert()
        .success();
    assert!(stderr_of(&assert).contains("is empty"));
    assert!(assert.get_output().stdout.is_empty());
}

#[test]
fn raw_view_of_workbook_as_markdown() {
    let dir = TempDir::new().unwrap();
    write_status_workbook(&dir.path().join("estado.xlsx"));

    let assert = tablero()
        .current_dir(dir.path())
        .args(["raw", "estado.xlsx", "--format", "markdown"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert!(stdout.contains("_3 filas de datos, 16 columnas_"));
    assert!(stdout.contains("| Expediente | Columna2 | Ana Ruiz |"));
    assert!(stdout.contains("01/10/2025"));
}

#[test]
fn init_creates_config_file() {
    let dir = TempDir::new().unwrap();

    tablero().current_dir(dir.path()).arg("init").assert().success();

    let written = fs::read_to_string(dir.path().join(".tablero.toml")).unwrap();
    assert!(written.contains("[sheet]"));
    assert!(written.contains("name = \"DD\""));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".tablero.toml"), "# existing").unwrap();

    let assert = tablero().current_dir(dir.path()).arg("init").assert().failure();
    assert!(stderr_of(&assert).contains("--force"));
    assert_eq!(
        fs::read_to_string(dir.path().join(".tablero.toml")).unwrap(),
        "# existing"
    );

    tablero()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn report_on_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    let assert = tablero()
        .current_dir(dir.path())
        .args(["report", "no-existe.xlsx"])
        .assert()
        .failure();
    assert!(stderr_of(&assert).contains("Failed to read worksheet"));
}

#[test]
fn report_on_non_spreadsheet_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("estado.xlsx");
    fs::write(&path, "esto no es un libro de cálculo").unwrap();

    tablero()
        .current_dir(dir.path())
        .args(["report", "estado.xlsx", "--plain"])
        .assert()
        .failure();
}

#[test]
fn explicit_config_that_does_not_parse_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("roto.toml"), "[sheet\nname = ").unwrap();

    let assert = tablero()
        .current_dir(dir.path())
        .args(["raw", "estado.xlsx", "--config", "roto.toml"])
        .assert()
        .failure();
    assert!(stderr_of(&assert).contains("Failed to load configuration"));
}

#[test]
fn invalid_as_of_date_is_rejected() {
    tablero()
        .args(["report", "estado.xlsx", "--as-of", "ayer"])
        .assert()
        .failure();
}

#[test]
fn help_lists_commands() {
    let assert = tablero().arg("--help").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert!(stdout.contains("report"));
    assert!(stdout.contains("raw"));
    assert!(stdout.contains("init"));
}
