pub mod json;
pub mod markdown;
pub mod terminal;

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::formatting::FormattingConfig;
use crate::io;
use crate::report::{RawTable, Tablero};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
}

/// How a rendered view is shaped and where it goes.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// `chrono` format string used for every displayed date.
    pub date_format: String,
    pub formatting: FormattingConfig,
    pub top: Option<usize>,
    pub output_file: Option<PathBuf>,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Terminal,
            date_format: "%d-%m-%y".to_string(),
            formatting: FormattingConfig::default(),
            top: None,
            output_file: None,
        }
    }
}

impl OutputOptions {
    /// Format to use, switching to markdown when writing terminal output to a `.md` file.
    pub fn effective_format(&self) -> OutputFormat {
        match self.format {
            OutputFormat::Terminal if is_markdown_file(self.output_file.as_deref()) => {
                OutputFormat::Markdown
            }
            format => format,
        }
    }
}

fn is_markdown_file(path: Option<&Path>) -> bool {
    path.and_then(|p| p.extension())
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

pub fn render_report(tablero: &Tablero, options: &OutputOptions) -> Result<String> {
    let mut tablero = tablero.clone();
    if let Some(top) = options.top {
        tablero.truncate(top);
    }

    match options.effective_format() {
        OutputFormat::Json => json::report_to_json(&tablero, &options.date_format),
        OutputFormat::Markdown => Ok(markdown::report_to_markdown(
            &tablero,
            &options.date_format,
        )?),
        OutputFormat::Terminal => Ok(terminal::report_to_terminal(
            &tablero,
            &options.date_format,
            options.formatting,
        )),
    }
}

pub fn render_raw(table: &RawTable, options: &OutputOptions) -> Result<String> {
    match options.effective_format() {
        OutputFormat::Json => json::raw_to_json(table),
        OutputFormat::Markdown => Ok(markdown::raw_to_markdown(table)?),
        OutputFormat::Terminal => Ok(terminal::raw_to_terminal(table, options.formatting)),
    }
}

/// Print `content` to stdout, or write it to the configured output file.
pub fn emit(content: &str, options: &OutputOptions) -> Result<()> {
    match &options.output_file {
        Some(path) => {
            io::write_output_file(path, content)?;
            log::info!("Wrote report to {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}
