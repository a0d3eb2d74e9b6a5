use assert_fs::prelude::*;
use j2c_fs::{FsStore, LineEnding, NormalizedPath, TextStore};
use predicates::prelude::*;

#[test]
fn fs_store_reads_what_was_written() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("default.items");
    file.write_str("Switch Light \"Light\"\n").unwrap();

    let store = FsStore::new();
    let path = NormalizedPath::new(file.path());

    assert_eq!(store.read_text(&path).unwrap(), "Switch Light \"Light\"\n");
}

#[test]
fn fs_store_write_lines_replaces_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("default.items");
    file.write_str("Switch Light\n").unwrap();

    let store = FsStore::new();
    let lines = vec![
        "Group gAll".to_string(),
        "Switch Light {channel=\"a:b\"}".to_string(),
    ];
    store
        .write_lines(&NormalizedPath::new(file.path()), &lines, LineEnding::Lf)
        .unwrap();

    file.assert(predicate::str::diff(
        "Group gAll\nSwitch Light {channel=\"a:b\"}\n",
    ));
}
