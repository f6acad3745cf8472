//! Error types for the podsift application.

use podsift_search::SearchError;

/// Top-level error type for the command-line application.
#[derive(Debug, thiserror::Error)]
pub enum PodsiftError {
    /// Configuration file or value error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Search pipeline construction error.
    #[error("search error: {0}")]
    Search(#[from] SearchError),

    /// Output rendering error.
    #[error("render error: {0}")]
    Render(String),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, PodsiftError>;
