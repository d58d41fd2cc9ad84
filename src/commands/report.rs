use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info_span;

use super::{output_options, read_sheet, resolve_config};
use crate::cli::SourceArgs;
use crate::env::{Clock, FixedClock, SystemClock};
use crate::output;
use crate::report::{self, SheetReport};

pub struct ReportConfig {
    pub source: SourceArgs,
    pub top: Option<usize>,
    pub as_of: Option<NaiveDate>,
}

pub fn handle_report(config: ReportConfig) -> Result<()> {
    let _span = info_span!("report", file = %config.source.file.display()).entered();

    let settings = resolve_config(&config.source)?;
    let mut options = output_options(&config.source, &settings);
    options.top = config.top;

    let clock: Box<dyn Clock> = match config.as_of {
        Some(date) => Box::new(FixedClock::at_date(date)),
        None => Box::new(SystemClock),
    };

    let load = read_sheet(&config.source.file, &settings)?;
    let tablero = match report::report_from_load(load, &settings, clock.as_ref())? {
        SheetReport::Ready { tablero, .. } => tablero,
        SheetReport::Empty => {
            log::warn!(
                "Worksheet '{}' in {} has no data",
                settings.sheet.name,
                config.source.file.display()
            );
            eprintln!("Worksheet '{}' is empty; nothing to report.", settings.sheet.name);
            return Ok(());
        }
    };

    let rendered = output::render_report(&tablero, &options).context("Failed to render report")?;
    output::emit(&rendered, &options)
}
