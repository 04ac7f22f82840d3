//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A vendor namespace name is empty or malformed.
    #[error("invalid vendor namespace: {0:?}")]
    InvalidNamespace(String),

    /// A variable name cannot be looked up through a placeholder.
    #[error("invalid variable name: {0:?}")]
    InvalidVariableName(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
