//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("database connection failed: {0}")]
    Connection(String),

    #[error("query execution failed: {0}")]
    Query(String),

    #[error("constraint violation: {0}")]
    Constraint(String),
}

/// Upload storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The file was refused before any bytes were written.
    #[error("upload rejected: {0}")]
    Rejected(String),

    #[error("upload failed: {0}")]
    Io(String),
}
