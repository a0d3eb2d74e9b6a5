//! Atomic I/O operations with file locking

use std::fs::{self, OpenOptions};
use std::io::Write;

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Line terminator detected in, and written back to, a text file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Detect the terminator used by `content`. Any `\r\n` wins.
    pub fn detect(content: &str) -> Self {
        if content.contains("\r\n") {
            Self::CrLf
        } else {
            Self::Lf
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename strategy to prevent partial writes.
/// Acquires an advisory lock on the temp file while writing.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Temp file lives in the same directory so the rename stays on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: native_path.clone(),
        })?;

    let written = temp_file
        .write_all(content)
        .and_then(|_| temp_file.sync_all())
        .map_err(|e| Error::io(&temp_path, e));
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    FileExt::unlock(&temp_file).map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    if let Err(e) = fs::rename(&temp_path, &native_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(&native_path, e));
    }

    tracing::debug!(path = %path, bytes = content.len(), "Wrote file atomically");
    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Split text into lines, returning the detected line ending alongside.
///
/// A final terminator does not produce a trailing empty line.
pub fn split_lines(content: &str) -> (Vec<String>, LineEnding) {
    let ending = LineEnding::detect(content);
    let lines = content.lines().map(str::to_string).collect();
    (lines, ending)
}

/// Join lines with `ending`, terminating the last line as well.
pub fn join_lines(lines: &[String], ending: LineEnding) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 2).sum());
    for line in lines {
        out.push_str(line);
        out.push_str(ending.as_str());
    }
    out
}

/// Write `lines` to `path` atomically, each terminated by `ending`.
pub fn write_lines(path: &NormalizedPath, lines: &[String], ending: LineEnding) -> Result<()> {
    write_text(path, &join_lines(lines, ending))
}

/// List regular files directly inside `dir` whose extension is `extension`.
///
/// Paths are canonicalized and returned in sorted order so that repeated
/// runs visit files in the same sequence.
pub fn list_files_with_extension(
    dir: &NormalizedPath,
    extension: &str,
) -> Result<Vec<NormalizedPath>> {
    let native_dir = dir.to_native();
    if !native_dir.is_dir() {
        return Err(Error::NotADirectory { path: native_dir });
    }

    let entries = fs::read_dir(&native_dir).map_err(|e| Error::io(&native_dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(&native_dir, e))?;
        let entry_path = entry.path();
        if !entry_path.is_file() {
            continue;
        }
        let candidate = NormalizedPath::new(&entry_path);
        if candidate.extension() != Some(extension) {
            continue;
        }
        let absolute =
            dunce::canonicalize(&entry_path).map_err(|e| Error::io(&entry_path, e))?;
        files.push(NormalizedPath::new(absolute));
    }
    files.sort();

    tracing::debug!(dir = %dir, extension, count = files.len(), "Listed files");
    Ok(files)
}
