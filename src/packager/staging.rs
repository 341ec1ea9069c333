//! Staging builder.
//!
//! Assembles the staging directory: erases any previous staging tree,
//! then copies each inclusion entry into it, pruning excluded entries
//! (and their whole subtrees) at every depth of the recursive copy.
//!
//! All writes land under the staging root; the source tree is never
//! modified. A missing inclusion entry is a warning, any I/O failure
//! during the copy is fatal.

use crate::error::{Result, StagingError};
use crate::packager::pattern::{is_excluded, ExcludePattern};
use crate::packager::settings::Settings;
use crate::packager::utils;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Result of staging a single inclusion entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    /// A single file was copied.
    File,
    /// A directory was copied recursively; carries the file count.
    Directory {
        /// Number of files copied under the directory
        files: usize,
    },
    /// The entry does not exist on disk (warning, not an error).
    Missing,
}

/// Remove any stale staging directory and create a fresh one.
///
/// Returns the absolute staging path. Stale content never survives: the
/// previous tree is deleted in full before the new one is populated.
pub async fn prepare_staging(root: &Path, settings: &Settings) -> Result<PathBuf> {
    let staging = root.join(&settings.staging_dir);
    utils::fs::create_dir_all(&staging, true).await?;
    log::debug!("Prepared staging directory at {}", staging.display());
    Ok(staging)
}

/// Stage one inclusion entry (file or directory) into the staging root.
///
/// The entry is stat'ed on disk to decide between a direct file copy and
/// a recursive, exclusion-aware directory copy.
pub async fn stage_entry(
    root: &Path,
    staging: &Path,
    entry: &str,
    patterns: &[ExcludePattern],
) -> Result<StageOutcome> {
    let relative = entry.trim_end_matches('/');
    let source = root.join(relative);
    let dest = staging.join(relative);

    if !source.exists() {
        log::warn!("Inclusion entry not found: {}", entry);
        return Ok(StageOutcome::Missing);
    }

    let metadata = fs::metadata(&source)
        .await
        .map_err(|e| StagingError::StatFailed {
            path: source.clone(),
            reason: e.to_string(),
        })?;

    if metadata.is_dir() {
        let files = copy_dir_filtered(&source, &dest, patterns).await?;
        Ok(StageOutcome::Directory { files })
    } else {
        utils::fs::copy_file(&source, &dest).await?;
        Ok(StageOutcome::File)
    }
}

/// Recursively copy a directory, skipping any entry whose base name
/// matches an exclusion pattern.
///
/// Pruning happens at traversal time, so an excluded directory's
/// descendants are never visited. The traversal root itself is exempt
/// from matching; only entries inside it are tested.
async fn copy_dir_filtered(
    from: &Path,
    to: &Path,
    patterns: &[ExcludePattern],
) -> Result<usize> {
    let mut files_copied = 0usize;

    let walker = walkdir::WalkDir::new(from)
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            let excluded = is_excluded(&name, patterns);
            if excluded {
                log::debug!("Excluded: {}", entry.path().display());
            }
            !excluded
        });

    for entry in walker {
        let entry = entry.map_err(|e| StagingError::WalkFailed {
            path: from.to_path_buf(),
            reason: e.to_string(),
        })?;
        let rel_path =
            entry
                .path()
                .strip_prefix(from)
                .map_err(|e| StagingError::WalkFailed {
                    path: from.to_path_buf(),
                    reason: e.to_string(),
                })?;
        let dest_path = to.join(rel_path);

        if entry.file_type().is_dir() {
            utils::fs::create_dir_all(&dest_path, false).await?;
        } else {
            utils::fs::copy_file(entry.path(), &dest_path).await?;
            files_copied += 1;
        }
    }

    Ok(files_copied)
}
