//! SnapshotWalker - streams filtered entries in pre-order to a section

use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{debug, warn};

use super::entry::{Entry, EntryKind, display_name};
use super::filter::Filter;

/// Callback for streaming output - receives every surviving entry in tree order.
pub trait SnapshotSection {
    fn start(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn visit(&mut self, entry: &Entry) -> io::Result<()>;

    fn finish(&mut self) -> io::Result<()>;
}

/// Walks a project root, pruning by [`Filter`], visiting siblings in
/// file-name order.
pub struct SnapshotWalker {
    root: PathBuf,
    filter: Filter,
}

impl SnapshotWalker {
    pub fn new(root: impl Into<PathBuf>, filter: Filter) -> Self {
        Self {
            root: root.into(),
            filter,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Walk the tree once, feeding `section` every surviving entry.
    ///
    /// Unreadable directories and vanished entries are logged and skipped.
    /// Only errors returned by `section` abort the walk.
    pub fn walk_streaming<S: SnapshotSection>(&self, section: &mut S) -> io::Result<()> {
        let filter = self.filter.clone();
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let name = entry.file_name().to_string_lossy();
                if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                    filter.should_descend(&name)
                } else {
                    filter.should_list_file(&name)
                }
            })
            .build();

        section.start()?;
        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("skipping unreadable entry: {err}");
                    continue;
                }
            };

            let Some(kind) = classify(entry.path(), entry.file_type()) else {
                continue;
            };

            section.visit(&Entry::new(&self.root, entry.path(), entry.depth(), kind))?;
        }

        section.finish()
    }

    /// Collect the walk into memory; handy for callers that need both
    /// sections from one traversal.
    pub fn collect(&self) -> io::Result<Vec<Entry>> {
        let mut collected = CollectedEntries::default();
        self.walk_streaming(&mut collected)?;
        Ok(collected.0)
    }
}

/// Map a walked entry to a snapshot node; `None` means skip it.
fn classify(path: &Path, file_type: Option<std::fs::FileType>) -> Option<EntryKind> {
    let file_type = file_type?;
    if file_type.is_dir() {
        return Some(EntryKind::Dir);
    }
    if file_type.is_file() {
        return Some(EntryKind::File);
    }
    if file_type.is_symlink() {
        // Symlinked files are read through; symlinked dirs are never entered.
        // A dangling link is still a file entry; its read fails later.
        return match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => Some(EntryKind::File),
            Ok(_) => {
                debug!("not following directory symlink {}", path.display());
                None
            }
            Err(err) => {
                debug!("listing broken symlink {}: {err}", display_name(path));
                Some(EntryKind::File)
            }
        };
    }
    debug!("skipping special file {}", path.display());
    None
}

#[derive(Default)]
struct CollectedEntries(Vec<Entry>);

impl SnapshotSection for CollectedEntries {
    fn visit(&mut self, entry: &Entry) -> io::Result<()> {
        self.0.push(entry.clone());
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}
