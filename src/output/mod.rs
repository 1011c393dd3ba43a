//! Snapshot sections
//!
//! - `tree`: `TreeRenderer`, the indented structure outline
//! - `content`: `ContentAggregator`, the inlined file bodies
//! - `status`: colored progress lines for the terminal

mod content;
mod status;
mod tree;

pub use content::{ContentAggregator, read_error_placeholder};
pub use status::{StatusPrinter, should_use_color};
pub use tree::{SEPARATOR, STRUCTURE_HEADER, TreeRenderer};
