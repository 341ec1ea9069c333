//! Compiled-in packaging configuration.
//!
//! All configuration is baked into the binary: the inclusion list, the
//! exclusion patterns, the staging directory name, and the archive file
//! name. There are no flags, config files, or environment overrides for
//! these values.

use crate::packager::pattern::ExcludePattern;

/// Essential files and directories to include in the deployment package.
///
/// Entries ending in `/` are directories copied recursively; everything
/// else is a single file. Paths are relative to the project root the tool
/// is run from.
pub const ESSENTIAL_FILES: &[&str] = &[
    // Root configuration files
    "package.json",
    "tsconfig.json",
    "tsconfig.app.json",
    "tsconfig.node.json",
    "vite.config.ts",
    "tailwind.config.js",
    "postcss.config.js",
    "eslint.config.js",
    "capacitor.config.ts",
    "index.html",
    "README.md",
    "DEPLOYMENT.md",
    // Source code
    "src/",
    // Android project
    "android/",
    // Documentation
    "docs/",
    // Scripts
    "scripts/",
];

/// Entries to exclude even when they appear inside an included directory.
///
/// Literal patterns match by exact name or substring; patterns containing
/// `*` match as anchored wildcards over the entry name.
pub const EXCLUDE_PATTERNS: &[&str] = &[
    "node_modules",
    "dist",
    ".git",
    ".env",
    ".env.local",
    ".env.production",
    "build",
    "*.log",
    ".DS_Store",
    "Thumbs.db",
    "*.tmp",
    "*.temp",
    ".cache",
    "coverage",
    ".nyc_output",
];

/// Name of the staging directory created in the current working directory.
pub const STAGING_DIR: &str = "sahm-delivery-deployment";

/// Name of the archive produced from the staging directory.
pub const ZIP_FILE_NAME: &str = "sahm-delivery-essential-files.zip";

/// Packaging settings resolved at startup.
///
/// Carries the inclusion list, the compiled exclusion patterns, output
/// names, and the product identity used by the generated artifacts.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Root-relative paths to stage
    pub include: Vec<String>,
    /// Compiled exclusion patterns
    pub exclude: Vec<ExcludePattern>,
    /// Staging directory name
    pub staging_dir: String,
    /// Archive file name (`.zip`; the tar fallback swaps the extension)
    pub archive_name: String,
    /// Product name rendered into the generated artifacts
    pub product_name: String,
    /// Upstream repository link rendered into the deployment README
    pub repository_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            include: ESSENTIAL_FILES.iter().map(|s| s.to_string()).collect(),
            exclude: EXCLUDE_PATTERNS.iter().map(ExcludePattern::new).collect(),
            staging_dir: STAGING_DIR.to_string(),
            archive_name: ZIP_FILE_NAME.to_string(),
            product_name: "Sahm Delivery".to_string(),
            repository_url: "https://github.com/elzubair484/sahm-delivery-app.git".to_string(),
        }
    }
}

impl Settings {
    /// Archive name with the `.zip` extension swapped for `.tar.gz`,
    /// used by the fallback archiver.
    pub fn tarball_name(&self) -> String {
        self.archive_name.replace(".zip", ".tar.gz")
    }
}
