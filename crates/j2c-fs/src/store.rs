//! The read/write seam used by the channel appender and the exporter.

use crate::io::{self, LineEnding};
use crate::{NormalizedPath, Result};

/// Text storage that commands read from and write to.
pub trait TextStore {
    /// Read the whole file as text.
    fn read_text(&self, path: &NormalizedPath) -> Result<String>;

    /// Replace the whole file with `lines`, each terminated by `ending`.
    fn write_lines(&self, path: &NormalizedPath, lines: &[String], ending: LineEnding)
    -> Result<()>;
}

/// [`TextStore`] backed by the real filesystem with atomic writes.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStore;

impl FsStore {
    pub fn new() -> Self {
        Self
    }
}

impl TextStore for FsStore {
    fn read_text(&self, path: &NormalizedPath) -> Result<String> {
        io::read_text(path)
    }

    fn write_lines(
        &self,
        path: &NormalizedPath,
        lines: &[String],
        ending: LineEnding,
    ) -> Result<()> {
        io::write_lines(path, lines, ending)
    }
}
