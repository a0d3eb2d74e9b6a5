//! Error types for the json2config CLI

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] j2c_core::Error),

    #[error(transparent)]
    Fs(#[from] j2c_fs::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize settings: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("Failed to serialize settings: {0}")]
    Json(#[from] serde_json::Error),
}
