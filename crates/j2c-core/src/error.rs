//! Error types for j2c-core

use std::path::PathBuf;

/// Result type for j2c-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in j2c-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Explicitly requested settings file does not exist
    #[error("Settings file not found at {path}")]
    SettingsNotFound { path: PathBuf },

    /// A settings value is out of range
    #[error("Invalid setting `{key}`: {reason}")]
    InvalidSetting { key: String, reason: String },

    /// Filesystem error from j2c-fs
    #[error(transparent)]
    Fs(#[from] j2c_fs::Error),

    /// Content error from j2c-content
    #[error(transparent)]
    Content(#[from] j2c_content::Error),
}
