//! Unified error types for the user API core
//!
//! `DomainError` covers the failure modes a repository adapter can surface.
//! The controller never translates these: a fault from the store propagates
//! to the caller unchanged, while "not found" and "invalid input" are normal
//! outcomes expressed in the result envelope, not errors.

use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
