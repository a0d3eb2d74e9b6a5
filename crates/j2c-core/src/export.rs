//! Loading database dumps and rendering them for output.

use serde_json::{Map, Value};

use j2c_content::{
    ChannelLink, Checked, Diagnostic, Extraction, ItemExtractor, parse_channel_links,
    parse_document, render_tree, summary_line,
};
use j2c_fs::{LineEnding, NormalizedPath, TextStore};

use crate::{Result, Settings};

/// Read and parse a JSON document whose root must be an object.
pub fn load_document(store: &dyn TextStore, path: &NormalizedPath) -> Result<Map<String, Value>> {
    let source = store.read_text(path)?;
    let document = parse_document(&source)?;
    tracing::debug!(path = %path, keys = document.len(), "Loaded document");
    Ok(document)
}

/// Load a channel-link export.
///
/// Malformed links are skipped and returned as diagnostics; only an
/// unreadable or unparsable document fails.
pub fn load_channel_links(
    store: &dyn TextStore,
    path: &NormalizedPath,
) -> Result<Checked<Vec<ChannelLink>>> {
    let document = load_document(store, path)?;
    let links = parse_channel_links(&document);
    tracing::info!(path = %path, links = links.value.len(), "Loaded channel links");
    Ok(links)
}

/// Render a loaded document as indented tree text.
pub fn tree_text(document: &Map<String, Value>, settings: &Settings) -> String {
    render_tree(document, &settings.indent_unit())
}

/// Items extracted from one database dump.
#[derive(Debug)]
pub struct ItemsExport {
    extraction: Extraction,
}

impl ItemsExport {
    pub fn from_document(document: &Map<String, Value>, settings: &Settings) -> Self {
        let extractor = ItemExtractor::new(settings.expected_class.clone());
        Self {
            extraction: extractor.extract_all(document),
        }
    }

    pub fn load(store: &dyn TextStore, path: &NormalizedPath, settings: &Settings) -> Result<Self> {
        let document = load_document(store, path)?;
        Ok(Self::from_document(&document, settings))
    }

    pub fn extraction(&self) -> &Extraction {
        &self.extraction
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = (&str, &Diagnostic)> {
        self.extraction
            .diagnostics
            .iter()
            .map(|(key, diagnostic)| (key.as_str(), diagnostic))
    }

    /// One `{name:<35}: ItemRecord(...)` line per item, sorted by name.
    pub fn summary_lines(&self) -> Vec<String> {
        self.extraction
            .items
            .iter()
            .map(|(name, record)| summary_line(name, record))
            .collect()
    }

    /// `.items` declarations, groups first so members can refer to them.
    pub fn config_lines(&self) -> Vec<String> {
        let (groups, members): (Vec<_>, Vec<_>) = self
            .extraction
            .items
            .iter()
            .partition(|(_, record)| record.item_type.eq_ignore_ascii_case("group"));
        groups
            .into_iter()
            .chain(members)
            .map(|(name, record)| record.to_config_line(name))
            .collect()
    }

    /// Write [`config_lines`](Self::config_lines) to `target`.
    ///
    /// Returns the number of lines rendered. Nothing is written on a dry run.
    pub fn write_items_file(
        &self,
        store: &dyn TextStore,
        target: &NormalizedPath,
        dry_run: bool,
    ) -> Result<usize> {
        let lines = self.config_lines();
        if dry_run {
            tracing::info!(path = %target, lines = lines.len(), "[dry-run] Would write items file");
        } else {
            store.write_lines(target, &lines, LineEnding::Lf)?;
            tracing::info!(path = %target, lines = lines.len(), "Wrote items file");
        }
        Ok(lines.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use j2c_test_utils::MemoryStore;
    use j2c_test_utils::fixtures::{CHANNEL_LINKS_JSONDB, ITEMS_JSONDB};
    use pretty_assertions::assert_eq;

    #[test]
    fn groups_are_declared_before_members() {
        let store = MemoryStore::with(&[("items.json", ITEMS_JSONDB)]);
        let export = ItemsExport::load(
            &store,
            &NormalizedPath::new("items.json"),
            &Settings::default(),
        )
        .unwrap();

        let lines = export.config_lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Group:Switch:OR(ON,OFF) gLights"));
        assert!(lines[1].starts_with("Dimmer Hall_Dimmer"));
        assert!(lines[2].starts_with("Switch Kitchen_Light"));
    }

    #[test]
    fn dry_run_write_touches_nothing() {
        let store = MemoryStore::with(&[("items.json", ITEMS_JSONDB)]);
        let export = ItemsExport::load(
            &store,
            &NormalizedPath::new("items.json"),
            &Settings::default(),
        )
        .unwrap();

        let count = export
            .write_items_file(&store, &NormalizedPath::new("out.items"), true)
            .unwrap();

        assert_eq!(count, 3);
        assert!(store.writes().is_empty());
    }

    #[test]
    fn missing_document_is_an_error() {
        let store = MemoryStore::default();
        let result = load_document(&store, &NormalizedPath::new("absent.json"));
        assert!(matches!(result, Err(crate::Error::Fs(_))));
    }

    #[test]
    fn non_object_root_is_an_error() {
        let store = MemoryStore::with(&[("list.json", "[1, 2]")]);
        let result = load_document(&store, &NormalizedPath::new("list.json"));
        assert!(matches!(result, Err(crate::Error::Content(_))));
    }

    #[test]
    fn channel_links_are_loaded_in_document_order() {
        let store = MemoryStore::with(&[("links.json", CHANNEL_LINKS_JSONDB)]);
        let links = load_channel_links(&store, &NormalizedPath::new("links.json")).unwrap();

        let names: Vec<_> = links.value.iter().map(|l| l.item_name.as_str()).collect();
        assert_eq!(names, ["Kitchen_Light", "Hall_Dimmer", "Garage_Door"]);
        assert!(links.diagnostics.is_empty());
    }
}
