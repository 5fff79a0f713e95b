//! Error types shared by the knitting helpers and the MCP layer.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, KnitError>;

/// Everything that can go wrong inside a single call.
#[derive(Error, Debug)]
pub enum KnitError {
    /// The chart generator does not know this pattern.
    #[error("unsupported pattern: {0}")]
    InvalidPattern(String),

    /// An input was out of range (negative, non-finite, zero-sized, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No resource answers to this URI.
    #[error("resource not found: {0}")]
    ResourceNotFound(String),

    /// The configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KnitError {
    /// JSON-RPC error code for protocol-level failures.
    pub fn error_code(&self) -> i64 {
        match self {
            KnitError::InvalidPattern(_) | KnitError::InvalidArgument(_) => -32602,
            KnitError::ResourceNotFound(_) => -32002,
            KnitError::Json(_) => -32700,
            KnitError::Config(_) | KnitError::Io(_) => -32603,
        }
    }
}
