//! Pulp - squeeze a project tree into one text file
//!
//! The artifact holds an indented outline of the tree, a separator, then the
//! contents of every file with a whitelisted extension.

pub mod error;
pub mod output;
pub mod snapshot;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::SnapshotError;
pub use output::{ContentAggregator, StatusPrinter, TreeRenderer, should_use_color};
pub use snapshot::{Snapshot, SnapshotReport};
pub use tree::{
    Entry, EntryKind, Filter, FilterRules, IGNORED_DIRS, IGNORED_FILES, INCLUDED_EXTENSIONS,
    OUTPUT_FILE_NAME, SnapshotSection, SnapshotWalker,
};
