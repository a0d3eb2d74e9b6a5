//! Channel links and the clause appended to item declarations.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::diagnostic::{Checked, Diagnostic};
use crate::document::value_text;

/// A binding from an item to a hardware/protocol channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelLink {
    /// Opaque key of the link in the exported document.
    pub link_id: String,
    pub item_name: String,
    /// Channel UID components, e.g. `["zwave:device:1", "switch_binary"]`.
    pub channel_segments: Vec<String>,
    /// `value.configuration.properties` (offset, sourceFormat, profile, ...).
    pub properties: BTreeMap<String, String>,
}

impl ChannelLink {
    pub fn new(
        item_name: impl Into<String>,
        channel_segments: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let item_name = item_name.into();
        let channel_segments: Vec<String> = channel_segments.into_iter().map(Into::into).collect();
        Self {
            link_id: format!("{} -> {}", item_name, channel_segments.join(":")),
            item_name,
            channel_segments,
            properties: BTreeMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Channel UID as written in `.items` files: segments joined by `:`.
    pub fn channel_path(&self) -> String {
        self.channel_segments.join(":")
    }
}

#[derive(Deserialize)]
struct RawLink {
    value: RawLinkValue,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLinkValue {
    #[serde(rename = "channelUID")]
    channel_uid: RawChannelUid,
    item_name: String,
    #[serde(default)]
    configuration: Option<RawConfiguration>,
}

#[derive(Deserialize)]
struct RawChannelUid {
    segments: Vec<String>,
}

#[derive(Deserialize)]
struct RawConfiguration {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
}

/// Read every link of an exported channel-link document.
///
/// Entries that do not have the expected shape are skipped with a
/// [`Diagnostic::Malformed`]; the remaining links keep document order.
pub fn parse_channel_links(document: &Map<String, Value>) -> Checked<Vec<ChannelLink>> {
    let mut checked = Checked::ok(Vec::with_capacity(document.len()));

    for (link_id, value) in document {
        match RawLink::deserialize(value) {
            Ok(raw) => {
                let properties = raw
                    .value
                    .configuration
                    .and_then(|c| c.properties)
                    .unwrap_or_default()
                    .iter()
                    .map(|(k, v)| (k.clone(), value_text(v)))
                    .collect();
                checked.value.push(ChannelLink {
                    link_id: link_id.clone(),
                    item_name: raw.value.item_name,
                    channel_segments: raw.value.channel_uid.segments,
                    properties,
                });
            }
            Err(e) => {
                let diagnostic = Diagnostic::Malformed {
                    key: link_id.clone(),
                    reason: e.to_string(),
                };
                tracing::warn!(link = %link_id, "{diagnostic}");
                checked.diagnostics.push(diagnostic);
            }
        }
    }

    tracing::debug!(links = checked.value.len(), "Parsed channel links");
    checked
}

/// How the channel clause is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelFormat {
    /// Append link properties as an openHAB profile block:
    /// `channel="a:b"[profile="offset", offset="2"]`.
    pub include_properties: bool,
}

impl ChannelFormat {
    pub fn clause(&self, link: &ChannelLink) -> String {
        let mut clause = format!("channel=\"{}\"", link.channel_path());
        if self.include_properties && !link.properties.is_empty() {
            let props: Vec<_> = link
                .properties
                .iter()
                .map(|(k, v)| format!("{k}=\"{v}\""))
                .collect();
            clause.push_str(&format!("[{}]", props.join(", ")));
        }
        clause
    }
}

/// Append the channel clause for `link` to an item declaration line.
///
/// An existing binding block (`... {key="val"}`) is extended in place;
/// otherwise a new block is opened. Only the trailing `}` is inspected, so
/// unbalanced braces in the input produce unbalanced output.
pub fn append_channel(line: &str, link: &ChannelLink, format: ChannelFormat) -> String {
    let head = line.trim_end();
    let clause = format.clause(link);
    let appended = match head.strip_suffix('}') {
        Some(open_block) => format!("{open_block}, {clause}}}"),
        None => format!("{head} {{{clause}}}"),
    };
    appended.trim().to_string()
}
