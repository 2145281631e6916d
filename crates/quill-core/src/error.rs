//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

use crate::ports::{CacheError, SummaryError};

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Blog not found with id: {id}")]
    NotFound { id: Uuid },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Summary unavailable: {0}")]
    SummaryUnavailable(#[from] SummaryError),

    // Infrastructure failures pass through unreinterpreted; the adapter
    // layer decides how to present them.
    #[error(transparent)]
    Repo(#[from] RepoError),

    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
