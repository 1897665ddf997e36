use std::fs;

use tracing::{info, instrument};

use crate::config::MappingSource;
use crate::error::{MapError, Result};

/// Downloads the remote mapping CSV and stores it at the local cache path.
#[instrument(level = "info", skip_all, fields(url = %source.export_url()))]
pub fn update_mapping(source: &MappingSource) -> Result<()> {
    let response = reqwest::blocking::get(source.export_url())?;
    let status = response.status().as_u16();
    let body = response.bytes()?;
    store_response(source, status, &body)
}

/// Applies the status check and the cache write for a downloaded response.
///
/// Nothing is written unless the status is a success, so a failed request
/// never corrupts an existing cache file.
pub fn store_response(source: &MappingSource, status: u16, body: &[u8]) -> Result<()> {
    if status >= 400 {
        return Err(MapError::RemoteFetch {
            url: source.export_url().to_owned(),
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        });
    }

    let cache = source.cache_path();
    if let Some(parent) = cache.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(cache, body)?;

    info!(path = %cache.display(), bytes = body.len(), "mapping file updated");
    println!("Mapping file successfully updated!");
    Ok(())
}
