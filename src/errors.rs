//! Error types for ragbuddy
//!
//! The document store is the only I/O boundary of the retrieval core, so it
//! is the only source of recoverable failure there. Everything else in the
//! core is total. Network failures belong to the generation client.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the ragbuddy pipeline
#[derive(Error, Debug)]
pub enum RagError {
    /// The documents directory is missing, not a directory, or unreadable
    #[error("Documents directory {path:?} is not usable: {reason}")]
    DocumentsDirectory { path: PathBuf, reason: String },

    /// A single document could not be read or decoded as UTF-8 text
    #[error("Failed to read document {path:?}: {source}")]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Ollama API errors
    #[error("Ollama API error: {0}")]
    OllamaApiError(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Timeout errors
    #[error("Operation timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },
}

/// Result type alias for ragbuddy operations
pub type Result<T> = std::result::Result<T, RagError>;
