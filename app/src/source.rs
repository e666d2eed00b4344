//! FILENAME: app/src/source.rs
//! Where the dataset comes from: the fixed remote workbook or a local file.
//! Format is chosen by extension; anything that is not .csv is treated as
//! XLSX, matching what the remote workbook is.

use dataset::Dataset;
use std::fmt;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Fixed remote dataset location used when no source is given.
pub const DEFAULT_DATA_URL: &str = "https://github.com/LeonardoMartinsFonseca/Dash_SuperStore/blob/a9a3d433521273fe621211e8ecc12724f796bce9/C%C3%B3pia%20de%20Superstore.xlsx?raw=true";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Remote(String),
    File(PathBuf),
}

impl DataSource {
    /// Loads the dataset. Any failure aborts the whole run with one
    /// descriptive message; nothing is rendered or written after a failed
    /// load.
    pub fn load(&self) -> Result<Dataset, String> {
        match self {
            DataSource::File(path) => load_file(path),
            DataSource::Remote(url) => load_remote(url),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Remote(url) => write!(f, "{url}"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn load_file(path: &Path) -> Result<Dataset, String> {
    let result = if is_csv(&path.to_string_lossy()) {
        ingest::load_csv(path)
    } else {
        ingest::load_xlsx(path)
    };
    result.map_err(|e| format!("failed to read {}: {}", path.display(), e))
}

fn load_remote(url: &str) -> Result<Dataset, String> {
    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| format!("failed to fetch {}: {}", url, e))?;
    let bytes = response
        .bytes()
        .map_err(|e| format!("failed to fetch {}: {}", url, e))?;

    let result = if is_csv(url) {
        ingest::load_csv_from_reader(bytes.as_ref())
    } else {
        ingest::load_xlsx_from_reader(Cursor::new(bytes.to_vec()))
    };
    result.map_err(|e| format!("failed to read {}: {}", url, e))
}

/// The query string does not count towards the extension.
fn is_csv(location: &str) -> bool {
    location
        .split('?')
        .next()
        .unwrap_or(location)
        .to_ascii_lowercase()
        .ends_with(".csv")
}
