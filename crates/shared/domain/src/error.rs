//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Entity not found
    #[error("{0}")]
    NotFound(String),

    /// The operation clashes with existing data (natural key taken, dependents present)
    #[error("{0}")]
    Conflict(String),

    /// A foreign key field points at a row that does not exist
    #[error("{field}: {message}")]
    InvalidReference {
        field: &'static str,
        message: String,
    },
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        DomainError::NotFound(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        DomainError::Conflict(msg.into())
    }

    /// Create an invalid reference error for `field`
    pub fn invalid_reference(field: &'static str, msg: impl Into<String>) -> Self {
        DomainError::InvalidReference {
            field,
            message: msg.into(),
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
