//! Storage operation errors

use lectern_core::AppError;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Stage failed: {0}")]
    StageFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::InvalidFilename(msg) => AppError::InvalidInput(msg),
            other => AppError::Internal(format!("Storage error: {}", other)),
        }
    }
}
