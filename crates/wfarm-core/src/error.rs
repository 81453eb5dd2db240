//! Unified error type for wfarm
//!
//! Remote-call failures never surface here: the HTTP boundary absorbs them
//! into `None` ("unavailable"). This type covers the local concerns only,
//! mostly configuration and CLI plumbing.

use thiserror::Error;

/// Unified error type for wfarm operations
#[derive(Error, Debug)]
pub enum FarmError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias using FarmError
pub type Result<T> = std::result::Result<T, FarmError>;
