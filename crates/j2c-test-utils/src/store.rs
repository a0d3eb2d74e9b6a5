//! In-memory [`TextStore`] that records every write.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use j2c_fs::io::join_lines;
use j2c_fs::{LineEnding, NormalizedPath, TextStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RefCell<BTreeMap<NormalizedPath, String>>,
    writes: RefCell<Vec<NormalizedPath>>,
    read_only: BTreeSet<NormalizedPath>,
}

impl MemoryStore {
    /// Create a store holding `(path, content)` pairs.
    pub fn with(files: &[(&str, &str)]) -> Self {
        let store = Self::default();
        for (path, content) in files {
            store
                .files
                .borrow_mut()
                .insert(NormalizedPath::new(path), content.to_string());
        }
        store
    }

    /// Make every write to one of `paths` fail with `PermissionDenied`.
    /// Reads still succeed.
    pub fn read_only(mut self, paths: &[&str]) -> Self {
        self.read_only.extend(paths.iter().map(NormalizedPath::new));
        self
    }

    /// Current content of `path`.
    ///
    /// # Panics
    /// Panics if the store has no such file.
    pub fn content(&self, path: &str) -> String {
        self.files
            .borrow()
            .get(&NormalizedPath::new(path))
            .cloned()
            .unwrap_or_else(|| panic!("MemoryStore: no file at {path}"))
    }

    /// Every path written successfully so far, in write order.
    pub fn writes(&self) -> Vec<NormalizedPath> {
        self.writes.borrow().clone()
    }
}

impl TextStore for MemoryStore {
    fn read_text(&self, path: &NormalizedPath) -> j2c_fs::Result<String> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            j2c_fs::Error::io(
                path.to_native(),
                std::io::Error::new(std::io::ErrorKind::NotFound, "not in memory store"),
            )
        })
    }

    fn write_lines(
        &self,
        path: &NormalizedPath,
        lines: &[String],
        ending: LineEnding,
    ) -> j2c_fs::Result<()> {
        if self.read_only.contains(path) {
            return Err(j2c_fs::Error::io(
                path.to_native(),
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only in memory store"),
            ));
        }
        self.writes.borrow_mut().push(path.clone());
        self.files
            .borrow_mut()
            .insert(path.clone(), join_lines(lines, ending));
        Ok(())
    }
}
