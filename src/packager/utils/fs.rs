//! File system helpers for staging.
//!
//! Thin wrappers over `tokio::fs` with automatic parent-directory creation
//! and staging-oriented error context.

use crate::error::{Result, StagingError};
use std::path::Path;
use tokio::fs;

/// Creates all of the directories of the specified path, erasing it first if specified.
pub async fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase && path.exists() {
        remove_dir_all(path).await?;
    }
    fs::create_dir_all(path)
        .await
        .map_err(|e| StagingError::CreateDirFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    Ok(())
}

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path)
            .await
            .map_err(|e| StagingError::CleanupFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
    }
    Ok(())
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Preserves no metadata beyond the file contents.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .map_err(|e| StagingError::CreateDirFailed {
                path: dest_dir.to_path_buf(),
                reason: e.to_string(),
            })?;
    }
    fs::copy(from, to)
        .await
        .map_err(|e| StagingError::CopyFailed {
            source_path: from.to_path_buf(),
            dest_path: to.to_path_buf(),
            reason: e.to_string(),
        })?;
    Ok(())
}
