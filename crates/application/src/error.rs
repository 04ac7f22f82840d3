//! Application error types

use blaster_domain::DomainError;
use thiserror::Error;

use crate::use_cases::LoadBuildConfigError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The build configuration could not be loaded.
    #[error("build config error: {0}")]
    LoadBuildConfig(#[from] LoadBuildConfigError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
