//! Error types for vimhelp.

use thiserror::Error;

/// Result type alias for vimhelp operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rendering a document.
#[derive(Error, Debug)]
pub enum Error {
    /// The layout cannot be satisfied at the configured width
    /// (e.g. a definition-list term column leaves no room for definitions).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The render options are inconsistent.
    #[error("Invalid render options: {0}")]
    InvalidOptions(String),

    /// Error (de)serializing a document tree.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
