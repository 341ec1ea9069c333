//! Command line argument parsing.
//!
//! The tool takes no configuration arguments: the inclusion list, the
//! exclusion patterns, and the output names are compiled in. The only
//! switches control output verbosity.

use clap::Parser;

/// Deployment packager for the essential project files
#[derive(Parser, Debug)]
#[command(
    name = "deploypack",
    version,
    about = "Stage essential project files and archive them for deployment",
    long_about = "Copies the essential project files and directories into a staging \
folder (excluding build artifacts, dependency trees, and secrets), generates the \
setup scripts and deployment README, and archives the result with the system zip \
utility (falling back to tar). Run it from the project root; there is nothing to \
configure."
)]
pub struct Args {
    /// Show per-file detail during staging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress everything except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Runtime configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    output: super::OutputManager,
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print message
    pub fn println(&self, message: &str) {
        let _ = self.output.println(message);
    }

    /// Print verbose message (only with --verbose)
    pub fn verbose_println(&self, message: &str) {
        let _ = self.output.verbose(message);
    }

    /// Print error message (always shown)
    pub fn error_println(&self, message: &str) {
        self.output.error(message);
    }

    /// Print warning message
    pub fn warning_println(&self, message: &str) {
        let _ = self.output.warn(message);
    }

    /// Print success message
    pub fn success_println(&self, message: &str) {
        let _ = self.output.success(message);
    }

    /// Print a pipeline progress message
    pub fn progress_println(&self, message: &str) {
        let _ = self.output.progress(message);
    }

    /// Print indented text
    pub fn indent(&self, message: &str) {
        let _ = self.output.indent(message);
    }

    /// Check if verbose output is enabled
    pub fn is_verbose(&self) -> bool {
        self.output.is_verbose()
    }
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, args.quiet),
        }
    }
}
