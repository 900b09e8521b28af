//! # Store Errors
//!
//! Error types for the data-access layer.

use thiserror::Error;

use crate::model::ValidationError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Data-access errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Referenced material does not exist
    #[error("Material {0} not found")]
    NotFound(i32),

    /// Request content rejected before touching storage
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Could not open a database connection
    #[error("Database connection failed: {0}")]
    Connection(String),

    /// Statement failed (constraint violation, decode error, ...)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Whether the error was caused by the request rather than storage
    pub fn is_client_error(&self) -> bool {
        matches!(self, StoreError::NotFound(_) | StoreError::Invalid(_))
    }
}
