//! The packaging pipeline: stage, generate, archive, report.
//!
//! A linear sequence with two branch kinds: per-entry existence checks
//! during staging (missing entries warn and continue) and the archiver's
//! two-level fallback (both failing is a degraded success, exit 0).

use crate::cli::RuntimeConfig;
use crate::error::Result;
use crate::packager::{
    self, ArchiveOutcome, ArchiverCommands, Settings, StageOutcome,
};

/// Run the full packaging pipeline in the current working directory.
///
/// Returns the process exit code: 0 on success (including degraded
/// archive-less success); fatal staging or artifact errors propagate as
/// `Err` and are mapped to a non-zero exit by the caller.
pub async fn execute_package(config: &RuntimeConfig) -> Result<i32> {
    let settings = Settings::default();
    let root = std::env::current_dir()?;

    config.progress_println(&format!(
        "Creating deployment package with essential files ({})...",
        settings.product_name
    ));

    // Stage
    let staging = packager::prepare_staging(&root, &settings).await?;
    config.progress_println("Copying essential files...");

    for entry in &settings.include {
        match packager::stage_entry(&root, &staging, entry, &settings.exclude).await? {
            StageOutcome::File => {
                config.success_println(&format!("Copied file: {}", entry));
            }
            StageOutcome::Directory { files } => {
                config.success_println(&format!("Copied directory: {}", entry));
                config.verbose_println(&format!("  {} files under {}", files, entry));
            }
            StageOutcome::Missing => {
                config.warning_println(&format!("File not found: {}", entry));
            }
        }
    }

    // Generate
    config.progress_println("Writing setup scripts and deployment README...");
    packager::write_artifacts(&staging, &settings).await?;

    // Archive
    config.progress_println("Creating archive...");
    let outcome = packager::create_archive(
        &root,
        &staging,
        &settings,
        &ArchiverCommands::default(),
    )
    .await?;

    match &outcome {
        ArchiveOutcome::Zip(path) | ArchiveOutcome::TarGz(path) => {
            config.success_println(&format!(
                "Created: {}",
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string())
            ));
        }
        ArchiveOutcome::Unarchived => {
            config.warning_println("Could not create archive automatically.");
            config.println(&format!("Files are ready in: {}/", settings.staging_dir));
            config.println("Manually zip the contents of this folder for distribution.");
        }
    }

    // Report
    let total = packager::directory_size(&staging)?;
    config.println(&format!("Total size: {}", packager::format_mib(total)));

    config.println("\nNext steps:");
    config.indent("1. Upload the archive to your distribution channel");
    config.indent("2. Or copy the files from the staging folder directly");

    Ok(0)
}
