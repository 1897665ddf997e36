use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::config::MappingSource;
use crate::error::Result;
use crate::mapping::{self, MappingTable};

/// Number of rows between progress events.
const PROGRESS_INTERVAL: usize = 1000;

/// Streams `input` through the mapping table into a sibling `.emap` file.
///
/// Each cell is trimmed for the lookup only; on a miss the original
/// untrimmed cell is written back unchanged. With `overwrite` the mapped
/// output replaces the input file once it is fully written. Returns the path
/// holding the mapped output.
#[instrument(level = "info", skip(source), fields(input = %input.display()))]
pub fn apply_mapping(source: &MappingSource, input: &Path, overwrite: bool) -> Result<PathBuf> {
    let mapping = mapping::load_mapping(source)?;
    let output = mapped_output_path(input);
    write_mapped(input, &output, &mapping)?;

    if overwrite {
        info!(input = %input.display(), "overwriting input with mapped output");
        fs::rename(&output, input)?;
        return Ok(input.to_path_buf());
    }
    Ok(output)
}

/// Sibling output path with an `.emap` marker before the extension, so
/// `data.csv` becomes `data.emap.csv`.
pub fn mapped_output_path(input: &Path) -> PathBuf {
    match input.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => input.with_extension(format!("emap.{ext}")),
        None => input.with_extension("emap"),
    }
}

fn write_mapped(input: &Path, output: &Path, mapping: &MappingTable) -> Result<()> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(input)?;
    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(output)?;

    let mut rows = 0usize;
    for record in reader.records() {
        let record = record?;
        writer.write_record(record.iter().map(|cell| {
            mapping
                .get(cell.trim())
                .map(String::as_str)
                .unwrap_or(cell)
        }))?;

        rows += 1;
        if rows % PROGRESS_INTERVAL == 0 {
            info!(rows, "rows mapped so far");
        }
    }

    writer.flush()?;
    info!(rows, output = %output.display(), "CSV mapping finished");
    Ok(())
}
