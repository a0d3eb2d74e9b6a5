//! Items persisted in a JSON database dump
//!
//! [`ItemExtractor`] reads the dump into [`ItemRecord`]s; records can be
//! listed with [`summary_line`] or rendered back into `.items` syntax with
//! [`ItemRecord::to_config_line`].

mod extract;
mod render;

pub use extract::{Extraction, ItemExtractor, PERSISTED_ITEM_CLASS};

use std::collections::BTreeSet;
use std::fmt;

/// Flat record of one persisted item. Absent fields stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemRecord {
    pub item_type: String,
    pub label: String,
    pub category: String,
    pub base_item_type: String,
    pub function_name: String,
    pub group_names: Vec<String>,
    pub tags: BTreeSet<String>,
    pub function_params: Vec<String>,
    pub dimension: String,
}

impl fmt::Display for ItemRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ItemRecord(itemType={}, label=\"{}\", category={}, baseItemType={}, \
             functionName={}, functionParams=[{}], groupNames=[{}], tags=[{}], dimension={})",
            self.item_type,
            self.label,
            self.category,
            self.base_item_type,
            self.function_name,
            self.function_params.join(", "),
            self.group_names.join(", "),
            self.tags.iter().map(String::as_str).collect::<Vec<_>>().join(", "),
            self.dimension,
        )
    }
}

/// One summary line: the key padded or cut to 35 columns, then the record.
pub fn summary_line(key: &str, record: &ItemRecord) -> String {
    format!("{key:<35.35}: {record}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ItemRecord {
        ItemRecord {
            item_type: "Switch".into(),
            label: "Kitchen Light".into(),
            category: "light".into(),
            group_names: vec!["gKitchen".into(), "gLights".into()],
            tags: ["Lighting".to_string()].into_iter().collect(),
            ..Default::default()
        }
    }

    #[test]
    fn display_lists_every_field() {
        assert_eq!(
            record().to_string(),
            "ItemRecord(itemType=Switch, label=\"Kitchen Light\", category=light, baseItemType=, \
             functionName=, functionParams=[], groupNames=[gKitchen, gLights], tags=[Lighting], dimension=)"
        );
    }

    #[test]
    fn summary_line_pads_short_keys() {
        let line = summary_line("Kitchen_Light", &record());
        assert!(line.starts_with("Kitchen_Light                      : ItemRecord("));
        assert_eq!(line.find(": ItemRecord"), Some(35));
    }

    #[test]
    fn summary_line_truncates_long_keys() {
        let key = "A_Very_Long_Item_Name_That_Exceeds_The_Column_Width";
        let line = summary_line(key, &record());
        assert!(line.starts_with("A_Very_Long_Item_Name_That_Exceeds_: "));
    }
}
