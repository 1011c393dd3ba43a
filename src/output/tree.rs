//! Structure section formatting

use std::io::{self, Write};

use crate::tree::{Entry, SnapshotSection};

/// First line of every snapshot.
pub const STRUCTURE_HEADER: &str = "PROJECT STRUCTURE:";

/// Rule closing the structure section: 50 `=`.
pub const SEPARATOR: &str = "==================================================";

const INDENT: &str = "    ";

/// Writes one line per entry, four spaces per depth level, `/` after
/// directory names.
pub struct TreeRenderer<'a, W: Write> {
    out: &'a mut W,
    dir_count: usize,
    file_count: usize,
}

impl<'a, W: Write> TreeRenderer<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self {
            out,
            dir_count: 0,
            file_count: 0,
        }
    }

    /// Directories below the root that were listed.
    pub fn dir_count(&self) -> usize {
        self.dir_count
    }

    pub fn file_count(&self) -> usize {
        self.file_count
    }
}

impl<W: Write> SnapshotSection for TreeRenderer<'_, W> {
    fn start(&mut self) -> io::Result<()> {
        writeln!(self.out, "{STRUCTURE_HEADER}")
    }

    fn visit(&mut self, entry: &Entry) -> io::Result<()> {
        let indent = INDENT.repeat(entry.depth);
        if entry.is_dir() {
            writeln!(self.out, "{indent}{}/", entry.name)?;
            if entry.depth > 0 {
                self.dir_count += 1;
            }
        } else {
            writeln!(self.out, "{indent}{}", entry.name)?;
            self.file_count += 1;
        }
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        write!(self.out, "\n\n{SEPARATOR}\n\n")
    }
}
