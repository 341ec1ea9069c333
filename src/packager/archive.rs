//! Archive creation with a two-level fallback.
//!
//! The staging directory's contents (not the directory itself as a nested
//! folder) are handed to the system `zip` utility first; if that fails or
//! the utility is absent, `tar` produces a gzipped tarball instead. When
//! both fail the run is still a success: the staging directory itself is
//! the deliverable.
//!
//! External invocations get no timeout; a hang in the archiver hangs the
//! run.

use crate::error::Result;
use crate::packager::settings::Settings;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Outcome of the archiving cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveOutcome {
    /// The primary `zip` invocation succeeded.
    Zip(PathBuf),
    /// The `tar` fallback succeeded.
    TarGz(PathBuf),
    /// Both archivers failed; the staging directory is the deliverable.
    Unarchived,
}

impl ArchiveOutcome {
    /// Path of the produced archive, if one was produced.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ArchiveOutcome::Zip(path) | ArchiveOutcome::TarGz(path) => Some(path),
            ArchiveOutcome::Unarchived => None,
        }
    }
}

/// Program names for the archiver cascade.
///
/// The production run always uses `zip` and `tar`; tests substitute
/// commands to exercise the fallback path.
#[derive(Debug, Clone)]
pub struct ArchiverCommands {
    /// Primary archiver program
    pub zip: String,
    /// Fallback archiver program
    pub tar: String,
}

impl Default for ArchiverCommands {
    fn default() -> Self {
        Self {
            zip: "zip".to_string(),
            tar: "tar".to_string(),
        }
    }
}

/// Run the archiving cascade against a populated staging directory.
///
/// Never returns an error for archiver failures; those degrade through
/// the cascade down to [`ArchiveOutcome::Unarchived`].
pub async fn create_archive(
    root: &Path,
    staging: &Path,
    settings: &Settings,
    commands: &ArchiverCommands,
) -> Result<ArchiveOutcome> {
    let zip_path = root.join(&settings.archive_name);
    match run_zip(&commands.zip, staging, &zip_path).await {
        Ok(()) => return Ok(ArchiveOutcome::Zip(zip_path)),
        Err(reason) => {
            log::warn!("zip invocation failed: {}", reason);
        }
    }

    let tar_path = root.join(settings.tarball_name());
    match run_tar(&commands.tar, staging, &tar_path).await {
        Ok(()) => Ok(ArchiveOutcome::TarGz(tar_path)),
        Err(reason) => {
            log::warn!("tar invocation failed: {}", reason);
            Ok(ArchiveOutcome::Unarchived)
        }
    }
}

/// Invoke the zip utility with the staging directory as the working
/// directory so the archive root holds the staged contents directly.
async fn run_zip(program: &str, staging: &Path, archive: &Path) -> std::result::Result<(), String> {
    let program = which::which(program).map_err(|e| format!("'{program}' not found: {e}"))?;

    let status = Command::new(&program)
        .arg("-r")
        .arg(archive)
        .arg(".")
        .current_dir(staging)
        .status()
        .await
        .map_err(|e| format!("failed to execute {}: {e}", program.display()))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!("exit code: {:?}", status.code()))
    }
}

/// Invoke the tar utility with `-C <staging>` so the tarball root holds
/// the staged contents directly.
async fn run_tar(program: &str, staging: &Path, archive: &Path) -> std::result::Result<(), String> {
    let program = which::which(program).map_err(|e| format!("'{program}' not found: {e}"))?;

    let status = Command::new(&program)
        .arg("-czf")
        .arg(archive)
        .arg("-C")
        .arg(staging)
        .arg(".")
        .status()
        .await
        .map_err(|e| format!("failed to execute {}: {e}", program.display()))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!("exit code: {:?}", status.code()))
    }
}
