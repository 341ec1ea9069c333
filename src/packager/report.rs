//! Staged-size reporting.
//!
//! Read-only recursive traversal; directories contribute zero and no
//! exclusions are applied, so the total includes the generated artifacts.

use crate::error::{Result, StagingError};
use std::path::Path;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Sum the sizes of all files under a directory tree, in bytes.
pub fn directory_size(path: &Path) -> Result<u64> {
    let mut total = 0u64;

    for entry in walkdir::WalkDir::new(path) {
        let entry = entry.map_err(|e| StagingError::WalkFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        if entry.file_type().is_file() {
            let metadata = entry.metadata().map_err(|e| StagingError::StatFailed {
                path: entry.path().to_path_buf(),
                reason: e.to_string(),
            })?;
            total += metadata.len();
        }
    }

    Ok(total)
}

/// Format a byte count as mebibytes with two-decimal precision.
pub fn format_mib(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / BYTES_PER_MIB)
}
