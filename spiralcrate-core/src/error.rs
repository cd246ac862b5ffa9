//! Error types for spiralcrate

use thiserror::Error;

/// Main error type for spiralcrate operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type alias for spiralcrate operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shorthand for building an [`Error::InvalidConfiguration`]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration(message.into())
    }
}
