//! # Store Errors
//!
//! Error types for bookshelf store operations.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors produced by `BookStore` operations.
///
/// Every variant maps to exactly one HTTP status at the request boundary;
/// nothing propagates past the handler that observed it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Request payload failed validation (maps to 400)
    #[error("{0}")]
    Validation(String),

    /// No book with the given id (maps to 404)
    #[error("{0}")]
    NotFound(String),

    /// Post-write verification failed (maps to 500)
    #[error("{0}")]
    Internal(String),
}

impl StoreError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_message() {
        let err = StoreError::validation("book name required");
        assert_eq!(err.to_string(), "book name required");

        let err = StoreError::not_found("book not found");
        assert_eq!(err.to_string(), "book not found");
    }
}
