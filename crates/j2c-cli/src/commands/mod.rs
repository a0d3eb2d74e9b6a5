//! Command implementations for the json2config CLI

pub mod channels;
pub mod convert;
pub mod items;
pub mod settings;
pub mod tree;

pub use channels::run_channels;
pub use convert::run_convert;
pub use items::run_items;
pub use settings::{run_completions, run_settings};
pub use tree::run_tree;
