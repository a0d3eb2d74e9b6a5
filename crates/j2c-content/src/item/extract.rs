//! Permissive extraction of item records from a JSON database dump.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::ItemRecord;
use crate::diagnostic::{Checked, Diagnostic};
use crate::document::{ValueKind, value_text};

/// Class tag written by the Eclipse SmartHome managed item provider.
pub const PERSISTED_ITEM_CLASS: &str =
    "org.eclipse.smarthome.core.items.ManagedItemProvider$PersistedItem";

/// Result of one extraction pass. Always produced, even for bad input.
#[derive(Debug, Default)]
pub struct Extraction {
    pub items: BTreeMap<String, ItemRecord>,
    /// Diagnostics keyed by the item they were raised for.
    pub diagnostics: Vec<(String, Diagnostic)>,
    /// Set when a top-level value was not an object and the pass stopped.
    pub aborted: bool,
}

impl Extraction {
    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|(_, d)| !d.is_fatal()).count()
    }
}

/// Reads `{ "<item name>": { "class": ..., "value": { ... } } }` documents.
#[derive(Debug, Clone)]
pub struct ItemExtractor {
    expected_class: String,
}

impl Default for ItemExtractor {
    fn default() -> Self {
        Self::new(PERSISTED_ITEM_CLASS)
    }
}

impl ItemExtractor {
    pub fn new(expected_class: impl Into<String>) -> Self {
        Self {
            expected_class: expected_class.into(),
        }
    }

    /// Extract every item of `document`.
    ///
    /// Malformed fields degrade to defaults. The first top-level value that
    /// is not an object stops the pass; items read before it are kept.
    pub fn extract_all(&self, document: &Map<String, Value>) -> Extraction {
        let mut extraction = Extraction::default();

        for (key, value) in document {
            let Value::Object(content) = value else {
                let diagnostic = Diagnostic::Shape {
                    key: key.clone(),
                    found: ValueKind::of(value),
                };
                tracing::error!(item = %key, "{diagnostic}; stopping extraction");
                extraction.diagnostics.push((key.clone(), diagnostic));
                extraction.aborted = true;
                break;
            };

            let checked = self.build_record(content);
            for diagnostic in &checked.diagnostics {
                tracing::warn!(item = %key, "{diagnostic}");
            }
            tracing::debug!(item = %key, record = %checked.value, "Extracted item");

            extraction.diagnostics.extend(
                checked
                    .diagnostics
                    .into_iter()
                    .map(|d| (key.clone(), d)),
            );
            extraction.items.insert(key.clone(), checked.value);
        }

        tracing::info!(
            items = extraction.items.len(),
            warnings = extraction.warning_count(),
            aborted = extraction.aborted,
            "Item extraction finished"
        );
        extraction
    }

    /// Build one record from a persisted item object.
    pub fn build_record(&self, content: &Map<String, Value>) -> Checked<ItemRecord> {
        let mut diagnostics = Vec::new();
        let mut record = ItemRecord::default();

        for (key, value) in content {
            match key.as_str() {
                "class" => {
                    if value.as_str() != Some(self.expected_class.as_str()) {
                        diagnostics.push(Diagnostic::ClassMismatch {
                            expected: self.expected_class.clone(),
                            found: value_text(value),
                        });
                    }
                }
                "value" => match value {
                    Value::Object(fields) => read_fields(&mut record, fields, &mut diagnostics),
                    other => diagnostics.push(Diagnostic::FieldType {
                        field: key.clone(),
                        expected: ValueKind::Object,
                        found: ValueKind::of(other),
                    }),
                },
                _ => diagnostics.push(Diagnostic::UnknownKey { key: key.clone() }),
            }
        }

        Checked {
            value: record,
            diagnostics,
        }
    }
}

fn read_fields(record: &mut ItemRecord, fields: &Map<String, Value>, sink: &mut Vec<Diagnostic>) {
    for (key, value) in fields {
        match key.as_str() {
            "itemType" => record.item_type = string_field(key, value).into_value(sink),
            "label" => record.label = string_field(key, value).into_value(sink),
            "category" => record.category = string_field(key, value).into_value(sink),
            "baseItemType" => record.base_item_type = string_field(key, value).into_value(sink),
            "functionName" => record.function_name = string_field(key, value).into_value(sink),
            "dimension" => record.dimension = string_field(key, value).into_value(sink),
            "groupNames" => record.group_names = string_list(key, value).into_value(sink),
            "tags" => {
                record.tags = string_list(key, value)
                    .into_value(sink)
                    .into_iter()
                    .collect()
            }
            "functionParams" => record.function_params = string_list(key, value).into_value(sink),
            _ => sink.push(Diagnostic::UnknownKey { key: key.clone() }),
        }
    }
}

/// A string field, or empty with a diagnostic.
pub(crate) fn string_field(field: &str, value: &Value) -> Checked<String> {
    match value {
        Value::String(s) => Checked::ok(s.clone()),
        other => Checked::with(
            String::new(),
            Diagnostic::FieldType {
                field: field.to_string(),
                expected: ValueKind::String,
                found: ValueKind::of(other),
            },
        ),
    }
}

/// The string elements of an array field. Other elements are skipped one by
/// one; a non-array yields an empty list.
pub(crate) fn string_list(field: &str, value: &Value) -> Checked<Vec<String>> {
    let Value::Array(elements) = value else {
        return Checked::with(
            Vec::new(),
            Diagnostic::FieldType {
                field: field.to_string(),
                expected: ValueKind::Array,
                found: ValueKind::of(value),
            },
        );
    };

    let mut checked = Checked::ok(Vec::with_capacity(elements.len()));
    for (index, element) in elements.iter().enumerate() {
        match element {
            Value::String(s) => checked.value.push(s.clone()),
            other => checked.diagnostics.push(Diagnostic::ElementType {
                field: field.to_string(),
                index,
                found: ValueKind::of(other),
            }),
        }
    }
    checked
}
