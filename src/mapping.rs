use std::collections::HashMap;
use std::fs::File;

use tracing::{info, instrument, warn};

use crate::config::MappingSource;
use crate::error::{MapError, Result};
use crate::fetch;

/// In-memory substitution table from original value to replacement value.
///
/// Rebuilt from the cached CSV on every load; keys are unique and non-empty.
pub type MappingTable = HashMap<String, String>;

/// Loads the mapping table, downloading the mapping file first when the
/// local cache does not exist yet.
#[instrument(level = "info", skip_all)]
pub fn load_mapping(source: &MappingSource) -> Result<MappingTable> {
    if !source.cache_path().exists() {
        fetch::update_mapping(source)?;
    }
    load_cached_mapping(source)
}

/// Loads the mapping table from the local cache only; never touches the
/// network.
///
/// Rows are checked in order (0-indexed for diagnostics): a row with fewer
/// than two cells aborts the whole load, a row with an empty key or a key
/// seen in an earlier row is skipped with a warning. The first occurrence of
/// a key wins.
pub fn load_cached_mapping(source: &MappingSource) -> Result<MappingTable> {
    let cache = source.cache_path();
    if !cache.exists() {
        return Err(MapError::MissingCache(cache.to_path_buf()));
    }

    let file = File::open(cache)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut mapping = MappingTable::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() < 2 {
            return Err(MapError::MalformedRow {
                row,
                columns: record.len(),
            });
        }

        let key = &record[0];
        let value = &record[1];

        if key.is_empty() {
            warn!(row, "empty key in mapping row, skipping");
            continue;
        }
        if mapping.contains_key(key) {
            warn!(row, key, value, "duplicate mapping key, keeping the first occurrence");
            continue;
        }

        mapping.insert(key.to_owned(), value.to_owned());
    }

    info!(entries = mapping.len(), "mapping table loaded");
    Ok(mapping)
}
