//! Configuration for tablero.
//!
//! Settings live in `.tablero.toml`, found by searching the working
//! directory and its ancestors, or passed explicitly with `--config`.
//! Every section is optional; missing values take the defaults that match
//! the standard `DD` status sheet.

pub mod columns;
pub mod core;
pub mod loader;

pub use columns::{column_index, column_letters, column_span, SheetLayout};
pub use self::core::{
    ColumnsConfig, DatesConfig, OutputConfig, SheetConfig, StagesConfig, TableroConfig,
};
pub use loader::{discover_config, load_config, load_config_from, CONFIG_FILE_NAME};

/// Contents written by `tablero init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Tablero Configuration

[sheet]
# Worksheet holding the case status grid
name = "DD"
# Rows 1 and 2 are reviewer first and last names
first_data_row = 3

[columns]
# One column per reviewer
reviewers = "C:O"
# Column naming the workflow stage of the rows below it
status = "P"

[stages]
labels = ["CONFECCIÓN", "REVISIÓN", "JEFATURA", "SUBGERENCIA", "GERENCIA"]
initial = "CONFECCIÓN"

[dates]
display_format = "%d-%m-%y"
# Two-digit years below the pivot are 20xx, the rest 19xx
two_digit_year_pivot = 50

[output]
# terminal, json or markdown
default_format = "terminal"
# Day counts highlighted in terminal output
warn_days = 15
alert_days = 30
"#;
