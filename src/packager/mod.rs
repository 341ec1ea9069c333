//! Deployment packaging core.
//!
//! Implements the linear packaging pipeline:
//!
//! 1. [`staging`] — erase and rebuild the staging directory, copying each
//!    compiled-in inclusion entry with exclusion-aware recursion.
//! 2. [`artifacts`] — write the generated setup scripts and README.
//! 3. [`archive`] — shell out to `zip`, falling back to `tar`, falling
//!    back to reporting the staging directory as the deliverable.
//! 4. [`report`] — sum and format the staged size.
//!
//! Configuration is compiled in (see [`settings`]); nothing is read from
//! flags, files, or the environment.

pub mod archive;
pub mod artifacts;
pub mod pattern;
pub mod report;
pub mod settings;
pub mod staging;
pub(crate) mod utils;

pub use archive::{create_archive, ArchiveOutcome, ArchiverCommands};
pub use artifacts::write_artifacts;
pub use pattern::{is_excluded, ExcludePattern};
pub use report::{directory_size, format_mib};
pub use settings::Settings;
pub use staging::{prepare_staging, stage_entry, StageOutcome};
