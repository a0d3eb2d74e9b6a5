//! Document model, tree rendering, item extraction and channel formatting
//!
//! Everything in this crate works on in-memory text and JSON values; file
//! access lives in `j2c-fs` and orchestration in `j2c-core`.

pub mod channel;
pub mod diagnostic;
pub mod document;
pub mod error;
pub mod item;
pub mod items_file;
pub mod tree;

pub use channel::{ChannelFormat, ChannelLink, append_channel, parse_channel_links};
pub use diagnostic::{Checked, Diagnostic};
pub use document::{ValueKind, parse_document};
pub use error::{Error, Result};
pub use item::{Extraction, ItemExtractor, ItemRecord, PERSISTED_ITEM_CLASS, summary_line};
pub use items_file::{ItemsFileLine, item_names, search_name_in_line};
pub use tree::{DEFAULT_INDENT, TreeLines, render_tree};
