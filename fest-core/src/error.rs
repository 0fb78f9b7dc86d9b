//! Error types for the fest app.

use thiserror::Error;

/// Errors that can occur in fest operations.
#[derive(Error, Debug)]
pub enum FestError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for fest operations.
pub type FestResult<T> = Result<T, FestError>;
