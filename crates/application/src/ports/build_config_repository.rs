//! Build configuration repository port
//!
//! Defines the interface for loading vendor variables.

use std::path::Path;

use async_trait::async_trait;
use blaster_domain::BuildConfig;

/// Errors that can occur while loading a build configuration.
#[derive(Debug, thiserror::Error)]
pub enum BuildConfigError {
    /// The configuration file does not exist.
    #[error("Build config not found: {0}")]
    NotFound(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file could not be parsed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The file extension does not name a supported format.
    #[error("Unsupported build config format: {0}")]
    UnsupportedFormat(String),
}

/// Repository trait for vendor variable files.
#[async_trait]
pub trait BuildConfigRepository: Send + Sync {
    /// Loads the build configuration stored at `path`.
    ///
    /// # Errors
    /// Returns `BuildConfigError::NotFound` if the file doesn't exist.
    async fn load(&self, path: &Path) -> Result<BuildConfig, BuildConfigError>;
}
