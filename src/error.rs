//! Top-level failures that stop a snapshot run
//!
//! Per-entry problems (an unreadable directory, a file that is not valid
//! UTF-8) never surface here; they are logged and written into the artifact
//! instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal error for a snapshot run.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The project root does not exist.
    #[error("cannot access '{}': No such file or directory", .0.display())]
    RootNotFound(PathBuf),

    /// The project root could not be inspected (e.g. permission denied).
    #[error("cannot access '{}': {source}", path.display())]
    RootInaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The project root exists but is not a directory.
    #[error("cannot snapshot '{}': Not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The output artifact could not be created or truncated.
    #[error("cannot create '{}': {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the output artifact failed part-way through.
    #[error("error writing output: {0}")]
    Write(#[from] io::Error),
}
