//! Error types for Notat.

use thiserror::Error;

/// Library-level error type for Notat operations.
#[derive(Error, Debug)]
pub enum NotatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid chunking parameters: {0}")]
    InvalidParameter(String),

    #[error("Summarization backend error: {0}")]
    Backend(String),

    #[error("Summarization failed on chunk {chunk_index}: {message}")]
    Summarization { chunk_index: usize, message: String },

    #[error("Transcript error: {0}")]
    Transcript(String),

    #[error("No captions available: {0}")]
    CaptionsNotFound(String),

    #[error("Media not found: {0}")]
    VideoNotFound(String),

    #[error("External tool not found: {0}. Please install it and ensure it's in your PATH.")]
    ToolNotFound(String),

    #[error("External tool failed: {0}")]
    ToolFailed(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Notat operations.
pub type Result<T> = std::result::Result<T, NotatError>;
