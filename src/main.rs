use anyhow::Result;
use clap::Parser;
use tablero::cli::{Cli, Commands};
use tablero::commands::{self, RawConfig, ReportConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.command.verbosity());

    match cli.command {
        Commands::Report { source, top, as_of } => {
            commands::handle_report(ReportConfig { source, top, as_of })
        }
        Commands::Raw { source } => commands::handle_raw(RawConfig { source }),
        Commands::Init { force } => commands::init_config(force),
    }
}

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

// RUST_LOG wins over -v flags. `log` records are forwarded to the same subscriber.
fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tablero={}", level_for(verbosity))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
