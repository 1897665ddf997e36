use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, MapError>;

/// Error type covering the different failure cases that can occur while
/// fetching, loading, or applying a mapping.
#[derive(Debug, Error)]
pub enum MapError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors bubbled up from the CSV reader or writer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Errors bubbled up from the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Raised when the shared-link configuration is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Raised when the remote source answers with an error status.
    #[error("wrong response from [{url}]: {status} ({body})")]
    RemoteFetch {
        url: String,
        status: u16,
        body: String,
    },

    /// Raised when a mapping row carries fewer than two columns.
    #[error("wrong columns number in mapping row #{row}: {columns} < 2")]
    MalformedRow { row: usize, columns: usize },

    /// Raised when the load-only mapping path finds no cached file.
    #[error("mapping file not downloaded yet: {0}")]
    MissingCache(PathBuf),

    /// Raised when the user provides a path that is missing or not a CSV file.
    #[error("wrong CSV file: {0}")]
    InvalidInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
