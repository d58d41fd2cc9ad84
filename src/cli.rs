use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "tablero")]
#[command(about = "Case-file aging dashboard for workflow status spreadsheets", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by the commands that read a workbook.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Workbook to read (.xlsx, .xlsm, .xls, .ods)
    pub file: PathBuf,

    /// Worksheet name (overrides the configured one)
    #[arg(short, long)]
    pub sheet: Option<String>,

    /// Configuration file (defaults to searching for .tablero.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Disable colored output
    #[arg(long = "plain", env = "TABLERO_PLAIN")]
    pub plain: bool,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the aging report, oldest assignments first
    Report {
        #[command(flatten)]
        source: SourceArgs,

        /// Show only the first N records
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Count days as of this date (YYYY-MM-DD) instead of now
        #[arg(long = "as-of")]
        as_of: Option<NaiveDate>,
    },

    /// Show the worksheet as loaded, with merged header names
    Raw {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Initialize a .tablero.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Self::Report { source, .. } | Self::Raw { source } => source.verbosity,
            Self::Init { .. } => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_report_arguments() {
        let cli = Cli::try_parse_from([
            "tablero",
            "report",
            "estado.xlsx",
            "--format",
            "json",
            "--top",
            "5",
            "--as-of",
            "2025-10-21",
            "-vv",
        ])
        .unwrap();

        let Commands::Report { source, top, as_of } = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(source.file, PathBuf::from("estado.xlsx"));
        assert_eq!(source.format, Some(OutputFormat::Json));
        assert_eq!(source.verbosity, 2);
        assert_eq!(top, Some(5));
        assert_eq!(as_of, NaiveDate::from_ymd_opt(2025, 10, 21));
    }

    #[test]
    fn test_rejects_malformed_as_of() {
        let result = Cli::try_parse_from(["tablero", "report", "a.xlsx", "--as-of", "21/10/2025"]);
        assert!(result.is_err());
    }
}
