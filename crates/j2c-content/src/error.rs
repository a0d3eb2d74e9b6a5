//! Error types for j2c-content

/// Result type for j2c-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in j2c-content operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse {format} content: {message}")]
    ParseError { format: String, message: String },

    #[error("Expected a JSON object at the document root, found {found}")]
    NotAnObject { found: &'static str },
}

impl Error {
    pub fn parse(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            format: format.into(),
            message: message.into(),
        }
    }
}
