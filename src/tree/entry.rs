//! Filesystem nodes handed to snapshot sections

use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

/// One surviving node of the filtered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Base name; the root uses "." when it has none.
    pub name: String,
    /// Root-relative path in `./a/b` form, always `/`-separated.
    pub relative_path: String,
    /// Path on disk, for reading contents.
    pub path: PathBuf,
    /// Nesting level, root is 0.
    pub depth: usize,
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(root: &Path, path: &Path, depth: usize, kind: EntryKind) -> Self {
        Self {
            name: display_name(path),
            relative_path: relative_path(root, path),
            path: path.to_path_buf(),
            depth,
            kind,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// Get the name of a path, defaulting to "." for root
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}

/// Render `path` relative to `root` as `./a/b`; the root itself is `.`.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let mut out = String::from(".");
    for component in rel.components() {
        if let Component::Normal(part) = component {
            out.push('/');
            out.push_str(&part.to_string_lossy());
        }
    }
    out
}
