//! Error types for ReelCut.

use thiserror::Error;

/// Main error type for ReelCut operations.
#[derive(Error, Debug)]
pub enum ReelCutError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for ReelCut operations.
pub type Result<T> = std::result::Result<T, ReelCutError>;
