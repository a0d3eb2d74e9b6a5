//! [`ItemsDir`] builder for channel-append scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory holding `.items` files and JSON exports.
///
/// # Example
///
/// ```rust,no_run
/// use j2c_test_utils::ItemsDir;
///
/// let dir = ItemsDir::new();
/// dir.write("default.items", "Switch Light\n");
/// assert_eq!(dir.read("default.items"), "Switch Light\n");
/// ```
pub struct ItemsDir {
    temp_dir: TempDir,
}

impl Default for ItemsDir {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemsDir {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap_or_else(|e| panic!("ItemsDir: temp dir: {e}")),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Write `content` to `name`, creating parent directories.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("ItemsDir: create {}: {e}", parent.display()));
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("ItemsDir: write {}: {e}", path.display()));
        path
    }

    pub fn read(&self, name: &str) -> String {
        let path = self.path(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("ItemsDir: read {}: {e}", path.display()))
    }

    pub fn read_bytes(&self, name: &str) -> Vec<u8> {
        let path = self.path(name);
        fs::read(&path).unwrap_or_else(|e| panic!("ItemsDir: read {}: {e}", path.display()))
    }

    /// Modification time of `name`, for asserting that a file was not rewritten.
    pub fn modified(&self, name: &str) -> std::time::SystemTime {
        let path = self.path(name);
        fs::metadata(&path)
            .and_then(|m| m.modified())
            .unwrap_or_else(|e| panic!("ItemsDir: stat {}: {e}", path.display()))
    }
}
