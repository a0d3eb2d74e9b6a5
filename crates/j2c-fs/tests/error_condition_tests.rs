//! Tests for error handling under adverse filesystem conditions

use j2c_fs::{LineEnding, NormalizedPath, io};
use tempfile::tempdir;

#[test]
fn read_text_nonexistent_file_returns_io_error_with_path() {
    let dir = tempdir().unwrap();
    let path = NormalizedPath::new(dir.path().join("does_not_exist.items"));

    let err = io::read_text(&path).unwrap_err();

    assert!(matches!(err, j2c_fs::Error::Io { .. }));
    assert!(err.to_string().contains("does_not_exist.items"));
}

#[test]
fn write_lines_to_nonexistent_parent_creates_directories() {
    let dir = tempdir().unwrap();
    let path = NormalizedPath::new(dir.path().join("a").join("b").join("deep.items"));

    io::write_lines(&path, &["Switch Deep".to_string()], LineEnding::Lf).unwrap();

    assert_eq!(io::read_text(&path).unwrap(), "Switch Deep\n");
}

#[test]
fn write_atomic_cleans_up_temp_file_on_success() {
    let dir = tempdir().unwrap();
    let path = NormalizedPath::new(dir.path().join("target.items"));

    io::write_text(&path, "content").unwrap();

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();

    assert!(
        leftovers.is_empty(),
        "No temp files should remain after successful write, found: {:?}",
        leftovers.iter().map(|e| e.file_name()).collect::<Vec<_>>()
    );
}

#[cfg(unix)]
mod unix_tests {
    use super::*;
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt;

    fn is_root() -> bool {
        match std::process::Command::new("id").arg("-u").output() {
            Ok(output) => String::from_utf8_lossy(&output.stdout).trim() == "0",
            Err(_) => false,
        }
    }

    #[test]
    fn read_text_permission_denied_returns_error() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("secret.items");
        fs::write(&file_path, "Switch Secret").unwrap();
        fs::set_permissions(&file_path, Permissions::from_mode(0o000)).unwrap();

        let result = io::read_text(&NormalizedPath::new(&file_path));

        let _ = fs::set_permissions(&file_path, Permissions::from_mode(0o644));
        assert!(result.is_err(), "Reading unreadable file should fail");
    }

    #[test]
    fn write_atomic_unwritable_parent_preserves_original() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let dir = tempdir().unwrap();
        let parent = dir.path().join("parent");
        fs::create_dir(&parent).unwrap();
        let file_path = parent.join("existing.items");
        fs::write(&file_path, "original").unwrap();
        fs::set_permissions(&parent, Permissions::from_mode(0o555)).unwrap();

        let result = io::write_text(&NormalizedPath::new(&file_path), "new content");

        let _ = fs::set_permissions(&parent, Permissions::from_mode(0o755));
        assert!(result.is_err(), "Writing when parent is read-only should fail");
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "original");
    }
}
