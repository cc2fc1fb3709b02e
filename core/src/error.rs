//! Common error types for ORDBOK.

use thiserror::Error;

/// Errors that can occur while decoding a page snapshot.
#[derive(Debug, Error)]
pub enum PageError {
    /// The snapshot is not valid JSON or does not have the page shape.
    #[error("Malformed page snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for page operations.
pub type PageResult<T> = Result<T, PageError>;
