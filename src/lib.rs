//! # deploypack
//!
//! Deployment packager for the essential project files.
//!
//! Copies a compiled-in list of files and directories into a staging
//! folder (excluding dependency trees, build artifacts, and secrets at
//! every depth), writes the setup scripts and deployment README, and
//! archives the result with the system `zip` utility, falling back to
//! `tar`, falling back to leaving the staged tree as the deliverable.
//!
//! ## Usage
//!
//! ```bash
//! deploypack            # package the current directory
//! deploypack --verbose  # with per-file detail
//! deploypack --quiet    # errors only
//! ```
//!
//! The run exits 0 on success, including the degraded case where no
//! archive could be produced; only staging or artifact-generation I/O
//! failures exit non-zero.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod cli;
pub mod error;
pub mod packager;

// Re-export main types for public API
pub use cli::Args;
pub use error::{PackageError, Result};
pub use packager::{
    create_archive, directory_size, format_mib, is_excluded, prepare_staging, stage_entry,
    write_artifacts, ArchiveOutcome, ArchiverCommands, ExcludePattern, Settings, StageOutcome,
};
