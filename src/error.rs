//! Error types for stamp grid layout

use thiserror::Error;

/// Result type alias for layout operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while laying out a stamp card
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A required stamp count that is not a positive integer
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Loyalty data from the backend that cannot be used at all
    #[error("Invalid loyalty data: {0}")]
    DataError(String),

    /// Invalid or unreadable layout configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigError(err.to_string())
    }
}
