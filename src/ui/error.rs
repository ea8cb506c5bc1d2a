//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error during terminal operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// UI operation was interrupted or cancelled
    #[error("UI operation was interrupted")]
    InterruptedError,
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
