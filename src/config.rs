use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{MapError, Result};

/// Directory under the user's home holding downloaded mapping files.
const CACHE_DIR_NAME: &str = ".easymap";

/// Pattern a sharable document link has to follow; the capture is the
/// document id used to name the local cache file.
const SHARED_LINK_PATTERN: &str = r"^https://docs\.google\.com/.+/d/([\w-]+)/.+";

/// Validated description of the remote mapping spreadsheet.
///
/// Built once at startup from the configured shared link and passed by
/// reference into the fetcher, loader, and transformer. The export URL and
/// the local cache path are derived eagerly, so the same link always yields
/// the same paths.
#[derive(Debug, Clone)]
pub struct MappingSource {
    shared_link: String,
    export_url: String,
    cache_path: PathBuf,
}

impl MappingSource {
    /// Validates the shared link and derives the export URL and cache path.
    ///
    /// The link must be a `docs.google.com` document URL containing a
    /// `/d/<ID>/` segment followed by at least one more path segment, the
    /// shape the "Get sharable link" action produces.
    pub fn new(shared_link: &str, cache_dir: &Path) -> Result<Self> {
        let pattern = Regex::new(SHARED_LINK_PATTERN).expect("valid shared-link pattern");
        let captures = pattern.captures(shared_link).ok_or_else(|| {
            MapError::Config(format!(
                "wrong shared link value: {shared_link:?} does not look like a \
                 docs.google.com document URL"
            ))
        })?;
        let document_id = &captures[1];

        // Everything before the trailing segment (usually `edit?...`) is the
        // document base; the CSV export endpoint hangs off it.
        let (base, _) = shared_link
            .rsplit_once('/')
            .ok_or_else(|| MapError::Config("shared link has no path segments".into()))?;

        Ok(Self {
            shared_link: shared_link.to_owned(),
            export_url: format!("{base}/export?format=csv"),
            cache_path: cache_dir.join(format!("mapping_{document_id}.csv")),
        })
    }

    /// Builds a source caching under `~/.easymap`.
    pub fn with_default_cache_dir(shared_link: &str) -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| MapError::Config("home directory could not be determined".into()))?;
        Self::new(shared_link, &home.join(CACHE_DIR_NAME))
    }

    /// The shared link as configured.
    pub fn shared_link(&self) -> &str {
        &self.shared_link
    }

    /// CSV export URL derived from the shared edit link.
    pub fn export_url(&self) -> &str {
        &self.export_url
    }

    /// Deterministic on-disk location of the downloaded mapping CSV.
    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINK: &str = "https://docs.google.com/spreadsheets/d/abc123DEF-45/edit?usp=sharing";

    #[test]
    fn derives_export_url_from_shared_link() {
        let source = MappingSource::new(LINK, Path::new("/tmp/cache")).expect("valid link");
        assert_eq!(
            source.export_url(),
            "https://docs.google.com/spreadsheets/d/abc123DEF-45/export?format=csv"
        );
    }

    #[test]
    fn cache_path_is_named_after_document_id() {
        let source = MappingSource::new(LINK, Path::new("/tmp/cache")).expect("valid link");
        assert_eq!(
            source.cache_path(),
            Path::new("/tmp/cache/mapping_abc123DEF-45.csv")
        );
    }

    #[test]
    fn same_link_yields_same_path() {
        let first = MappingSource::new(LINK, Path::new("/tmp/cache")).expect("valid link");
        let second = MappingSource::new(LINK, Path::new("/tmp/cache")).expect("valid link");
        assert_eq!(first.cache_path(), second.cache_path());
    }

    #[test]
    fn rejects_link_without_google_docs_prefix() {
        let result = MappingSource::new(
            "https://example.com/spreadsheets/d/abc/edit",
            Path::new("/tmp/cache"),
        );
        assert!(matches!(result, Err(MapError::Config(_))));
    }

    #[test]
    fn rejects_link_without_document_segment() {
        let result = MappingSource::new(
            "https://docs.google.com/spreadsheets/overview",
            Path::new("/tmp/cache"),
        );
        assert!(matches!(result, Err(MapError::Config(_))));
    }

    #[test]
    fn rejects_link_without_trailing_segment() {
        let result = MappingSource::new(
            "https://docs.google.com/spreadsheets/d/abc123",
            Path::new("/tmp/cache"),
        );
        assert!(matches!(result, Err(MapError::Config(_))));
    }
}
