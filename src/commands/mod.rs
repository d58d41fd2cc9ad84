//! Command handlers behind the `tablero` binary.
//!
//! - **report**: build the aging report from a workbook
//! - **raw**: show the worksheet as loaded
//! - **init**: write a default `.tablero.toml`

pub mod init;
pub mod raw;
pub mod report;

pub use init::init_config;
pub use raw::{handle_raw, RawConfig};
pub use report::{handle_report, ReportConfig};

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::SourceArgs;
use crate::config::{self, TableroConfig};
use crate::formatting::{AgeThresholds, ColorMode, FormattingConfig};
use crate::io::{self, SheetLoad};
use crate::output::OutputOptions;

/// Configuration after applying command-line overrides.
pub(crate) fn resolve_config(source: &SourceArgs) -> Result<TableroConfig> {
    let mut config = config::load_config(source.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(sheet) = &source.sheet {
        config.sheet.name = sheet.clone();
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

pub(crate) fn output_options(source: &SourceArgs, config: &TableroConfig) -> OutputOptions {
    let mut formatting = FormattingConfig::from_env().with_thresholds(AgeThresholds {
        warn_days: config.output.warn_days,
        alert_days: config.output.alert_days,
    });
    if source.plain {
        formatting.color = ColorMode::Never;
    }
    formatting.apply();

    OutputOptions {
        format: source.format.unwrap_or(config.output.default_format),
        date_format: config.dates.display_format.clone(),
        formatting,
        top: None,
        output_file: source.output.clone(),
    }
}

/// Read the configured worksheet and release the workbook file.
pub(crate) fn read_sheet(path: &Path, config: &TableroConfig) -> Result<SheetLoad> {
    io::read_workbook_sheet(path, &config.sheet.name)
        .with_context(|| format!("Failed to read worksheet from {}", path.display()))
}
