//! Compiled-in filtering rules
//!
//! There is no config file and there are no flags: what a snapshot contains
//! is decided here, at build time.

use std::collections::HashSet;

/// Name of the artifact written into the project root.
pub const OUTPUT_FILE_NAME: &str = "full_codebase.txt";

/// Directories that are pruned wherever they appear (VCS metadata,
/// dependency caches, build output, generated native projects).
pub const IGNORED_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    ".idea",
    ".vscode",
    "__pycache__",
    "build",
    "dist",
    "ios",
    "android",
    "assets",
    "target",
];

/// Files that never show up in either section.
pub const IGNORED_FILES: &[&str] = &[
    "package-lock.json",
    "yarn.lock",
    "Cargo.lock",
    ".DS_Store",
    OUTPUT_FILE_NAME,
];

/// Extensions whose contents get inlined. Dot-prefixed, case-sensitive.
pub const INCLUDED_EXTENSIONS: &[&str] = &[
    ".js", ".jsx", ".ts", ".tsx", ".json", ".py", ".css", ".scss", ".md", ".html", ".rs", ".toml",
];

/// Extensionless file that is always inlined.
pub const ALWAYS_INCLUDE: &str = "Dockerfile";

/// Immutable rule sets consulted by [`Filter`](super::Filter).
#[derive(Debug, Clone)]
pub struct FilterRules {
    pub ignored_dirs: HashSet<&'static str>,
    pub ignored_files: HashSet<&'static str>,
    pub included_extensions: HashSet<&'static str>,
    pub always_include: &'static str,
}

impl Default for FilterRules {
    fn default() -> Self {
        Self {
            ignored_dirs: IGNORED_DIRS.iter().copied().collect(),
            ignored_files: IGNORED_FILES.iter().copied().collect(),
            included_extensions: INCLUDED_EXTENSIONS.iter().copied().collect(),
            always_include: ALWAYS_INCLUDE,
        }
    }
}
