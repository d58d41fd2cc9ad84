use anyhow::{Context, Result};

use super::{output_options, read_sheet, resolve_config};
use crate::cli::SourceArgs;
use crate::io::SheetLoad;
use crate::output;
use crate::report::RawTable;

pub struct RawConfig {
    pub source: SourceArgs,
}

pub fn handle_raw(config: RawConfig) -> Result<()> {
    let settings = resolve_config(&config.source)?;
    let layout = settings.layout()?;
    let options = output_options(&config.source, &settings);

    let matrix = match read_sheet(&config.source.file, &settings)? {
        SheetLoad::Ready(matrix) => matrix,
        SheetLoad::Empty => {
            eprintln!("Worksheet '{}' is empty.", settings.sheet.name);
            return Ok(());
        }
    };

    let raw = RawTable::from_matrix(&matrix, layout.first_data_row);
    let load = raw.summary();
    log::info!(
        "Loaded {} data rows and {} columns from '{}'",
        load.data_rows,
        load.columns,
        settings.sheet.name
    );

    let rendered = output::render_raw(&raw, &options).context("Failed to render worksheet")?;
    output::emit(&rendered, &options)
}
