//! Orchestration layer for json2config
//!
//! Sits between the CLI and the two lower crates:
//!
//! ```text
//!          json2config (CLI)
//!                 |
//!             j2c-core
//!              /     \
//!      j2c-content  j2c-fs
//! ```
//!
//! - **ChannelAppender**: stitch exported channel links into `.items` files
//! - **Export**: load a JSON database dump and render it as tree lines,
//!   item summaries or `.items` declarations
//! - **Settings**: layered settings resolution

pub mod appender;
pub mod config;
pub mod error;
pub mod export;

pub use appender::{AppendFailure, AppendOptions, AppendReport, ChannelAppender};
pub use config::{Settings, SettingsFile, SettingsResolver};
pub use error::{Error, Result};
pub use export::{ItemsExport, load_channel_links, load_document, tree_text};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn error_settings_not_found_displays_path() {
        let error = Error::SettingsNotFound {
            path: PathBuf::from("/etc/json2config.toml"),
        };
        assert_eq!(
            error.to_string(),
            "Settings file not found at /etc/json2config.toml"
        );
    }
}
