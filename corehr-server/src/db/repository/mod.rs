//! Repository Module
//!
//! Typed CRUD access over the record store blobs.

pub mod credential;
pub mod employee;

// Re-exports
pub use credential::{CredentialEntry, CredentialRepository};
pub use employee::EmployeeRepository;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<crate::db::StoreError> for RepoError {
    fn from(err: crate::db::StoreError) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
