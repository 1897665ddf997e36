use std::path::PathBuf;

use clap::Parser;
use easymap::config::MappingSource;
use easymap::{MapError, Result, fetch, transform};
use tracing_subscriber::EnvFilter;

/// Shared link of the mapping spreadsheet. May be left empty and supplied
/// through the `EASYMAP_SHEET_URL` environment variable instead.
const MAPPING_SHEET_SHARED_URL: &str = "";

const FIRST_START_DESCRIPTION: &str = "\
easymap substitutes fields in a CSV file according to the map file stored in
a Google Spreadsheet.

To start working with easymap, please do the following steps:
 1. Go to https://docs.google.com/spreadsheets/ and create a new mapping
    spreadsheet;
 2. Fill it with pairs [original value | new value] placed in the two first
    columns;
 3. Click Share -> Get the sharable link and paste it into the
    MAPPING_SHEET_SHARED_URL constant or the EASYMAP_SHEET_URL environment
    variable.
";

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging()?;

    let shared_link = std::env::var("EASYMAP_SHEET_URL")
        .unwrap_or_else(|_| MAPPING_SHEET_SHARED_URL.to_owned());
    if shared_link.is_empty() {
        eprintln!("Google Drive mapping file url not specified.");
        eprintln!("{FIRST_START_DESCRIPTION}");
        std::process::exit(1);
    }

    let source = MappingSource::with_default_cache_dir(&shared_link)?;

    if cli.update {
        fetch::update_mapping(&source)?;
    }

    if let Some(file) = cli.file {
        if !file.exists() || file.extension().and_then(|ext| ext.to_str()) != Some("csv") {
            return Err(MapError::InvalidInput(file));
        }
        let output = transform::apply_mapping(&source, &file, cli.overwrite)?;
        println!("Mapped CSV written to {}", output.display());
    }

    Ok(())
}

fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .map_err(|error| MapError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Substitute CSV fields according to a Google Spreadsheet mapping."
)]
struct Cli {
    /// Editable CSV file to run the substitution on.
    file: Option<PathBuf>,

    /// Download and update the cached mapping file first.
    #[arg(long, short)]
    update: bool,

    /// Overwrite the editable CSV file with the mapped output.
    #[arg(long, short)]
    overwrite: bool,
}
