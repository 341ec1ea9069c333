//! Error types for deploypack operations.
//!
//! This module defines all error types with actionable error messages and recovery suggestions.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for deploypack operations
pub type Result<T> = std::result::Result<T, PackageError>;

/// Main error type for all deploypack operations
#[derive(Error, Debug)]
pub enum PackageError {
    /// Staging errors
    #[error("Staging error: {0}")]
    Staging(#[from] StagingError),

    /// Generated-artifact errors
    #[error("Artifact error: {0}")]
    Artifact(#[from] ArtifactError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Staging-specific errors
#[derive(Error, Debug)]
pub enum StagingError {
    /// Failed to remove a stale staging directory
    #[error("Failed to remove existing staging directory at {path}: {reason}")]
    CleanupFailed {
        /// Staging directory path
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },

    /// Failed to create a directory under the staging root
    #[error("Failed to create directory {path}: {reason}")]
    CreateDirFailed {
        /// Directory path
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },

    /// Failed to copy a file into staging
    #[error("Failed to copy {source_path} to {dest_path}: {reason}")]
    CopyFailed {
        /// Source file path
        source_path: PathBuf,
        /// Destination path under the staging root
        dest_path: PathBuf,
        /// Reason for the error
        reason: String,
    },

    /// A source path exists but could not be inspected
    #[error("Failed to stat {path}: {reason}")]
    StatFailed {
        /// Source path
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },

    /// Directory traversal failed mid-walk
    #[error("Failed to traverse {path}: {reason}")]
    WalkFailed {
        /// Root of the traversal
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },
}

/// Errors while generating the setup scripts and deployment README
#[derive(Error, Debug)]
pub enum ArtifactError {
    /// Template rendering failed
    #[error("Failed to render template '{name}': {reason}")]
    RenderFailed {
        /// Template name
        name: String,
        /// Reason for the error
        reason: String,
    },

    /// Writing the rendered artifact to disk failed
    #[error("Failed to write {path}: {reason}")]
    WriteFailed {
        /// Destination path
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },

    /// Setting permissions on a generated script failed
    #[error("Failed to set permissions on {path}: {reason}")]
    PermissionsFailed {
        /// Destination path
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },
}

impl PackageError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            PackageError::Staging(StagingError::CleanupFailed { path, .. }) => vec![
                format!("Remove the directory manually: rm -rf {}", path.display()),
                "Check that no other process is holding files open inside it".to_string(),
            ],
            PackageError::Staging(StagingError::CopyFailed { source_path, .. }) => vec![
                format!("Check read permissions on {}", source_path.display()),
                "Check free disk space: df -h .".to_string(),
            ],
            PackageError::Staging(StagingError::CreateDirFailed { .. }) => vec![
                "Check write permissions in the current directory".to_string(),
                "Check free disk space: df -h .".to_string(),
            ],
            PackageError::Artifact(_) => vec![
                "Check write permissions in the staging directory".to_string(),
                "Check free disk space: df -h .".to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
