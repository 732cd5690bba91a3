//! Saving generated receipts as downloadable files

use crate::config::consts::output::EXTENSION;
use crate::error::{ReceiptlabError, Result};
use chrono::{DateTime, Utc};
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name for a saved receipt: `<prefix>-<unix millis>.html`
pub fn download_file_name(prefix: &str, at: DateTime<Utc>) -> String {
    format!("{}-{}.{}", prefix, at.timestamp_millis(), EXTENSION)
}

/// Write `html` into `dir` under a timestamped name
///
/// Creates `dir` if needed. Never overwrites an existing file.
pub fn save_receipt(dir: &Path, prefix: &str, html: &str, at: DateTime<Utc>) -> Result<PathBuf> {
    let path = dir.join(download_file_name(prefix, at));
    let write_failed = |e: std::io::Error| ReceiptlabError::OutputWriteFailed {
        path: path.clone(),
        reason: e.to_string(),
    };

    std::fs::create_dir_all(dir).map_err(write_failed)?;
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(write_failed)?;
    file.write_all(html.as_bytes()).map_err(write_failed)?;

    tracing::info!(path = %path.display(), "saved receipt");
    Ok(path)
}
