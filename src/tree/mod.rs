//! Filtered directory traversal
//!
//! - `config`: compiled-in rule sets and the artifact name
//! - `filter`: pure name predicates over those rules
//! - `walker`: `SnapshotWalker`, a pre-order streaming walk feeding a `SnapshotSection`

mod config;
mod entry;
mod filter;
mod walker;

pub use config::{
    ALWAYS_INCLUDE, FilterRules, IGNORED_DIRS, IGNORED_FILES, INCLUDED_EXTENSIONS,
    OUTPUT_FILE_NAME,
};
pub use entry::{Entry, EntryKind};
pub use filter::{Filter, extension_of};
pub use walker::{SnapshotSection, SnapshotWalker};
