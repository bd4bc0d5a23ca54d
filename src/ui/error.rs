//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal could not be set up, drawn or restored
    #[error("Terminal I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// An external link could not be handed to the system opener
    #[error("Could not open '{target}': {source}")]
    OpenError {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
