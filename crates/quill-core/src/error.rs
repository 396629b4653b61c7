//! Typed errors for store operations
//!
//! All store errors are deterministic given input and current state;
//! nothing in the core performs I/O.

use thiserror::Error;

/// Errors surfaced by content store mutations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A mutation referenced an article identifier that does not exist
    #[error("no article found with id '{id}'")]
    ArticleNotFound { id: String },
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
