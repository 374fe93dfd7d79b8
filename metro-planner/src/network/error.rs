//! Network loading error types.

/// Errors that can occur when loading a network file.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Reading the file failed
    #[error("failed to read network file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid network JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A link refers to a stop id that can never be valid
    #[error("invalid link #{index}: {message}")]
    InvalidLink { index: usize, message: String },
}
