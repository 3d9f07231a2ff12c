//! HTML report file

use crate::error::IoError;
use std::fs;
use std::path::{Path, PathBuf};

/// Default directory the report is written to
pub const DEFAULT_REPORT_DIR: &str = "dependencies";

/// File name of the report inside the report directory
pub const REPORT_FILENAME: &str = "index.html";

/// Writes the HTML report into `dir`, creating it if needed, and returns the file path
pub fn write_report(dir: &Path, html: &str) -> Result<PathBuf, IoError> {
    fs::create_dir_all(dir).map_err(|source| IoError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(REPORT_FILENAME);
    fs::write(&path, html).map_err(|source| IoError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), "result written");
    Ok(path)
}
