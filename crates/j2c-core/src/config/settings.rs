//! Settings values and their partial, file-level form.

use j2c_content::PERSISTED_ITEM_CLASS;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const MAX_INDENT: usize = 16;

/// Effective settings after all layers are merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Spaces per indentation level in tree output.
    pub indent: usize,
    /// Extension (without dot) of the files the channel appender edits.
    pub items_extension: String,
    /// Class tag each persisted item is checked against.
    pub expected_class: String,
    /// Write link properties after the channel UID.
    pub include_properties: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            indent: 4,
            items_extension: "items".to_string(),
            expected_class: PERSISTED_ITEM_CLASS.to_string(),
            include_properties: false,
        }
    }
}

impl Settings {
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent)
    }

    /// Apply every value present in `file` on top of these settings.
    pub fn merge(&mut self, file: &SettingsFile) {
        if let Some(indent) = file.indent {
            self.indent = indent;
        }
        if let Some(ext) = &file.items_extension {
            self.items_extension = ext.trim_start_matches('.').to_string();
        }
        if let Some(class) = &file.expected_class {
            self.expected_class = class.clone();
        }
        if let Some(include) = file.include_properties {
            self.include_properties = include;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.indent > MAX_INDENT {
            return Err(Error::InvalidSetting {
                key: "indent".into(),
                reason: format!("{} exceeds the maximum of {MAX_INDENT}", self.indent),
            });
        }
        if self.items_extension.is_empty() {
            return Err(Error::InvalidSetting {
                key: "items_extension".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

/// One settings layer as written in a file. Absent keys inherit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_extension: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_properties: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.indent_unit(), "    ");
        assert_eq!(settings.items_extension, "items");
        assert_eq!(settings.expected_class, PERSISTED_ITEM_CLASS);
        assert!(!settings.include_properties);
    }

    #[test]
    fn merge_overrides_only_present_values() {
        let mut settings = Settings::default();
        settings.merge(&SettingsFile {
            indent: Some(2),
            items_extension: Some(".things".into()),
            ..Default::default()
        });

        assert_eq!(settings.indent, 2);
        assert_eq!(settings.items_extension, "things");
        assert_eq!(settings.expected_class, PERSISTED_ITEM_CLASS);
    }

    #[test]
    fn validate_rejects_huge_indent() {
        let settings = Settings {
            indent: 64,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(Error::InvalidSetting { key, .. }) if key == "indent"
        ));
    }

    #[test]
    fn validate_rejects_empty_extension() {
        let mut settings = Settings::default();
        settings.merge(&SettingsFile {
            items_extension: Some(".".into()),
            ..Default::default()
        });
        assert!(settings.validate().is_err());
    }
}
