//! Snapshot orchestration: one artifact, structure first, then contents

use std::fs::{self, File};
use std::io::ErrorKind;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SnapshotError;
use crate::output::{ContentAggregator, TreeRenderer};
use crate::tree::{Filter, OUTPUT_FILE_NAME, SnapshotWalker};

/// Counts gathered while writing a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotReport {
    pub output_path: PathBuf,
    /// Directories listed below the root.
    pub dirs: usize,
    /// Files listed in the structure section.
    pub files: usize,
    /// Files with a content header.
    pub inlined: usize,
    /// Inlined files whose body was replaced by a placeholder.
    pub unreadable: usize,
}

/// A validated project root, ready to be written out.
pub struct Snapshot {
    walker: SnapshotWalker,
}

impl Snapshot {
    /// Validate `root` with the compiled-in rules.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, SnapshotError> {
        Self::with_filter(root, Filter::default())
    }

    pub fn with_filter(root: impl Into<PathBuf>, filter: Filter) -> Result<Self, SnapshotError> {
        let root = root.into();
        let meta = match fs::metadata(&root) {
            Ok(meta) => meta,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(SnapshotError::RootNotFound(root));
            }
            Err(source) => return Err(SnapshotError::RootInaccessible { path: root, source }),
        };
        if !meta.is_dir() {
            return Err(SnapshotError::NotADirectory(root));
        }
        Ok(Self {
            walker: SnapshotWalker::new(root, filter),
        })
    }

    pub fn root(&self) -> &Path {
        self.walker.root()
    }

    /// Where [`write`](Self::write) puts the artifact.
    pub fn output_path(&self) -> PathBuf {
        self.root().join(OUTPUT_FILE_NAME)
    }

    /// Truncate and rewrite the artifact in the project root.
    ///
    /// The file handle is released on every path; a failed run may leave a
    /// partially written artifact behind.
    pub fn write(&self) -> Result<SnapshotReport, SnapshotError> {
        let output_path = self.output_path();
        let file = File::create(&output_path).map_err(|source| SnapshotError::CreateOutput {
            path: output_path.clone(),
            source,
        })?;
        let mut out = BufWriter::new(file);

        let mut report = self.write_to(&mut out)?;
        out.flush()?;
        debug!("snapshot written to {}", output_path.display());

        report.output_path = output_path;
        Ok(report)
    }

    /// Write both sections to `out`: the structure walk, then the content walk.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<SnapshotReport, SnapshotError> {
        let mut report = SnapshotReport::default();

        let mut renderer = TreeRenderer::new(&mut *out);
        self.walker.walk_streaming(&mut renderer)?;
        report.dirs = renderer.dir_count();
        report.files = renderer.file_count();

        let mut aggregator = ContentAggregator::new(&mut *out, self.walker.filter().clone());
        self.walker.walk_streaming(&mut aggregator)?;
        report.inlined = aggregator.inlined();
        report.unreadable = aggregator.unreadable();

        Ok(report)
    }
}
