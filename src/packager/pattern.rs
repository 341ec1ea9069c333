//! Exclusion pattern matching for the staging traversal.
//!
//! Two pattern flavors share a single predicate:
//!
//! - **Literal** (no `*`): matches when the entry name equals the pattern
//!   or contains it as a substring. The substring semantics are
//!   intentional; a pattern like `build` suppresses `build`, `build-old`,
//!   and `my-build-script.js` alike.
//! - **Wildcard** (contains `*`): `*` expands to "any number of
//!   characters" and the match is anchored over the full entry name, so
//!   `*.log` excludes `npm-debug.log` but not `logfile.txt`.

use regex::Regex;

/// A single compiled exclusion pattern.
#[derive(Debug, Clone)]
pub struct ExcludePattern {
    raw: String,
    matcher: Matcher,
}

#[derive(Debug, Clone)]
enum Matcher {
    /// Exact-or-substring match on the raw pattern string.
    Literal,
    /// Anchored wildcard regex, compiled once at construction.
    Wildcard(Regex),
}

impl ExcludePattern {
    /// Compile a pattern string.
    ///
    /// Wildcard patterns are translated to an anchored regex once, at
    /// construction; literal patterns keep only the raw string.
    pub fn new<S: AsRef<str>>(pattern: S) -> Self {
        let raw = pattern.as_ref().to_string();
        let matcher = if raw.contains('*') {
            let expanded = raw
                .split('*')
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(".*");
            // Every literal segment is regex-escaped, so the assembled
            // expression is always a valid regex.
            let regex = Regex::new(&format!("^{expanded}$"))
                .expect("escaped wildcard pattern is a valid regex");
            Matcher::Wildcard(regex)
        } else {
            Matcher::Literal
        };
        Self { raw, matcher }
    }

    /// The original pattern string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Test an entry's base name against this pattern.
    pub fn matches(&self, name: &str) -> bool {
        match &self.matcher {
            Matcher::Wildcard(regex) => regex.is_match(name),
            Matcher::Literal => name == self.raw || name.contains(&self.raw),
        }
    }
}

/// Test a name against every pattern; any match excludes the entry and,
/// for directories, its entire subtree.
pub fn is_excluded(name: &str, patterns: &[ExcludePattern]) -> bool {
    patterns.iter().any(|p| p.matches(name))
}
