//! Channel appending against real `.items` files on disk.

use j2c_content::{ChannelFormat, ChannelLink};
use j2c_core::{AppendOptions, ChannelAppender, load_channel_links};
use j2c_fs::io::list_files_with_extension;
use j2c_fs::{FsStore, NormalizedPath};
use j2c_test_utils::ItemsDir;
use j2c_test_utils::fixtures::{CHANNEL_LINKS_JSONDB, LIGHTS_ITEMS, UNRELATED_ITEMS};
use pretty_assertions::assert_eq;

fn items_files(dir: &ItemsDir) -> Vec<NormalizedPath> {
    list_files_with_extension(&NormalizedPath::new(dir.root()), "items").unwrap()
}

fn fixture_links(dir: &ItemsDir) -> Vec<ChannelLink> {
    let path = dir.write("links.json", CHANNEL_LINKS_JSONDB);
    load_channel_links(&FsStore::new(), &NormalizedPath::new(path))
        .unwrap()
        .value
}

#[test]
fn appends_channels_to_declaring_lines() {
    let dir = ItemsDir::new();
    dir.write("lights.items", LIGHTS_ITEMS);
    let links = fixture_links(&dir);

    let store = FsStore::new();
    let report = ChannelAppender::new(&store, AppendOptions::default())
        .append_channels(&links, &items_files(&dir));

    assert_eq!(report.links_found, 3);
    assert_eq!(report.items_found, 2);
    assert_eq!(report.matched, 2);
    assert_eq!(report.appended, 2);
    assert!(report.failures.is_empty());

    let content = dir.read("lights.items");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        [
            "Group:Switch:OR(ON,OFF) gLights \"All lights\"",
            "",
            "Switch Kitchen_Light \"Kitchen Light\" <light> (gLights) [\"Lighting\"] {channel=\"zwave:device:1:node2:switch_binary\"}",
            "Dimmer Hall_Dimmer \"Hall\" (gLights) {autoupdate=\"false\", channel=\"zwave:device:1:node3:switch_dimmer\"}",
        ]
    );
}

#[test]
fn unmatched_files_are_left_byte_for_byte() {
    let dir = ItemsDir::new();
    dir.write("lights.items", LIGHTS_ITEMS);
    dir.write("sensors.items", UNRELATED_ITEMS);
    let before = dir.read_bytes("sensors.items");
    let modified_before = dir.modified("sensors.items");
    let links = fixture_links(&dir);

    let store = FsStore::new();
    let report = ChannelAppender::new(&store, AppendOptions::default())
        .append_channels(&links, &items_files(&dir));

    assert_eq!(report.modified_files.len(), 1);
    assert!(report.modified_files[0].as_str().ends_with("lights.items"));
    assert_eq!(dir.read_bytes("sensors.items"), before);
    assert_eq!(dir.modified("sensors.items"), modified_before);
}

#[test]
fn second_run_appends_again() {
    let dir = ItemsDir::new();
    dir.write("one.items", "Switch Light\n");
    let links = vec![ChannelLink::new("Light", ["hue:0100:1", "color"])];
    let store = FsStore::new();
    let appender = ChannelAppender::new(&store, AppendOptions::default());

    appender.append_channels(&links, &items_files(&dir));
    let first = dir.read("one.items");
    appender.append_channels(&links, &items_files(&dir));
    let second = dir.read("one.items");

    assert_eq!(first, "Switch Light {channel=\"hue:0100:1:color\"}\n");
    assert_eq!(
        second,
        "Switch Light {channel=\"hue:0100:1:color\", channel=\"hue:0100:1:color\"}\n"
    );
}

#[test]
fn crlf_endings_survive_a_rewrite() {
    let dir = ItemsDir::new();
    dir.write("win.items", "// lights\r\nSwitch Light\r\n");
    let links = vec![ChannelLink::new("Light", ["hue:0100:1", "color"])];

    let store = FsStore::new();
    ChannelAppender::new(&store, AppendOptions::default())
        .append_channels(&links, &items_files(&dir));

    assert_eq!(
        dir.read("win.items"),
        "// lights\r\nSwitch Light {channel=\"hue:0100:1:color\"}\r\n"
    );
}

#[test]
fn duplicate_declarations_in_two_files_are_both_modified() {
    let dir = ItemsDir::new();
    dir.write("a.items", "Switch Light\n");
    dir.write("b.items", "Switch Light \"Other\"\n");
    let links = vec![ChannelLink::new("Light", ["hue:0100:1", "color"])];

    let store = FsStore::new();
    let report = ChannelAppender::new(&store, AppendOptions::default())
        .append_channels(&links, &items_files(&dir));

    assert_eq!(report.appended, 2);
    assert_eq!(report.modified_files.len(), 2);
    assert!(dir.read("a.items").contains("channel=\"hue:0100:1:color\""));
    assert!(dir.read("b.items").contains("channel=\"hue:0100:1:color\""));
}

#[test]
fn dry_run_leaves_the_directory_untouched() {
    let dir = ItemsDir::new();
    dir.write("lights.items", LIGHTS_ITEMS);
    let links = fixture_links(&dir);

    let store = FsStore::new();
    let options = AppendOptions {
        dry_run: true,
        ..Default::default()
    };
    let report = ChannelAppender::new(&store, options).append_channels(&links, &items_files(&dir));

    assert_eq!(report.appended, 2);
    assert_eq!(dir.read("lights.items"), LIGHTS_ITEMS);
}

#[test]
fn properties_are_written_when_requested() {
    let dir = ItemsDir::new();
    dir.write("lights.items", LIGHTS_ITEMS);
    let links = fixture_links(&dir);

    let store = FsStore::new();
    let options = AppendOptions {
        dry_run: false,
        format: ChannelFormat {
            include_properties: true,
        },
    };
    ChannelAppender::new(&store, options).append_channels(&links, &items_files(&dir));

    assert!(
        dir.read("lights.items")
            .contains("{channel=\"zwave:device:1:node2:switch_binary\"[profile=\"default\"]}")
    );
}

#[test]
fn non_utf8_file_is_reported_and_left_alone() {
    let dir = ItemsDir::new();
    let latin1 = b"Switch Light \"K\xfcche\"\n";
    std::fs::write(dir.path("latin1.items"), latin1).unwrap();
    dir.write("plain.items", "Switch Light\n");
    let links = vec![ChannelLink::new("Light", ["hue:0100:1", "color"])];

    let store = FsStore::new();
    let report = ChannelAppender::new(&store, AppendOptions::default())
        .append_channels(&links, &items_files(&dir));

    assert_eq!(report.appended, 1);
    assert!(!report.failures.is_empty());
    assert!(report.failures.iter().all(|f| f.path.as_str().ends_with("latin1.items")));
    assert_eq!(dir.read_bytes("latin1.items"), latin1);
    assert_eq!(dir.read("plain.items"), "Switch Light {channel=\"hue:0100:1:color\"}\n");
}
