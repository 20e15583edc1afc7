//! Metadata store error types.

use reelvault_models::VideoId;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during metadata store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("video not found: {0}")]
    NotFound(VideoId),

    #[error("video already exists: {0}")]
    AlreadyExists(VideoId),

    #[error("store error: {0}")]
    Internal(String),
}
