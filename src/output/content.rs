//! Content section: every eligible file, inlined verbatim

use std::fmt::Display;
use std::io::{self, Write};

use tracing::warn;

use crate::tree::{Entry, Filter, SnapshotSection};

/// Text written in place of a file body that could not be read as UTF-8.
pub fn read_error_placeholder(err: impl Display) -> String {
    format!("Error reading file: {err}")
}

/// Inlines files that pass [`Filter::should_include_content`], each under a
/// `--- FILE: <path> ---` header.
///
/// A file that cannot be read or decoded gets a placeholder instead of its
/// body; the section carries on with the next file.
pub struct ContentAggregator<'a, W: Write> {
    out: &'a mut W,
    filter: Filter,
    inlined: usize,
    unreadable: usize,
}

impl<'a, W: Write> ContentAggregator<'a, W> {
    pub fn new(out: &'a mut W, filter: Filter) -> Self {
        Self {
            out,
            filter,
            inlined: 0,
            unreadable: 0,
        }
    }

    /// Files that got a header, including ones replaced by a placeholder.
    pub fn inlined(&self) -> usize {
        self.inlined
    }

    pub fn unreadable(&self) -> usize {
        self.unreadable
    }

    fn write_body(&mut self, entry: &Entry) -> io::Result<()> {
        let bytes = match std::fs::read(&entry.path) {
            Ok(bytes) => bytes,
            Err(err) => return self.write_placeholder(entry, err),
        };
        match std::str::from_utf8(&bytes) {
            Ok(_) => self.out.write_all(&bytes),
            Err(err) => self.write_placeholder(entry, err),
        }
    }

    fn write_placeholder(&mut self, entry: &Entry, err: impl Display) -> io::Result<()> {
        warn!("cannot read {}: {err}", entry.relative_path);
        self.unreadable += 1;
        self.out.write_all(read_error_placeholder(err).as_bytes())
    }
}

impl<W: Write> SnapshotSection for ContentAggregator<'_, W> {
    fn visit(&mut self, entry: &Entry) -> io::Result<()> {
        if entry.is_dir() || !self.filter.should_include_content(&entry.name) {
            return Ok(());
        }
        write!(self.out, "\n\n--- FILE: {} ---\n\n", entry.relative_path)?;
        self.inlined += 1;
        self.write_body(entry)
    }

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}
