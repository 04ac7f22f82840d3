//! File-based build configuration repository.
//!
//! Vendor variables are read from a JSON or YAML file, chosen by extension:
//! ```text
//! out/soong/soong.variables   (JSON, vendor namespaces under "VendorVars")
//! vendor/blaster/vars.yaml    (YAML, bare namespace map)
//! ```

use std::path::Path;

use async_trait::async_trait;
use blaster_application::ports::{
    BuildConfigError, BuildConfigRepository, FileSystem, FileSystemError,
};
use blaster_domain::BuildConfig;

use crate::serialization::{build_config_from_json, build_config_from_yaml};

/// Supported vendor variable file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.json` and `.variables` files.
    Json,
    /// `.yaml` and `.yml` files.
    Yaml,
}

impl ConfigFormat {
    /// Picks a format from the file extension.
    ///
    /// # Errors
    /// Returns `BuildConfigError::UnsupportedFormat` for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, BuildConfigError> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "json" | "variables" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(BuildConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Converts `FileSystemError` to `BuildConfigError`.
fn to_build_config_error(e: FileSystemError) -> BuildConfigError {
    match e {
        FileSystemError::NotFound(path) => BuildConfigError::NotFound(path.display().to_string()),
        FileSystemError::PermissionDenied(path) => BuildConfigError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            path.display().to_string(),
        )),
        FileSystemError::Io(io_err) => BuildConfigError::Io(io_err),
    }
}

/// Build configuration repository backed by files.
#[derive(Debug, Clone)]
pub struct FileBuildConfigRepository<F> {
    fs: F,
}

impl<F: FileSystem> FileBuildConfigRepository<F> {
    /// Creates a new file-based repository.
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }
}

#[async_trait]
impl<F: FileSystem + Sync> BuildConfigRepository for FileBuildConfigRepository<F> {
    async fn load(&self, path: &Path) -> Result<BuildConfig, BuildConfigError> {
        let format = ConfigFormat::from_path(path)?;

        if !self.fs.exists(path).await {
            return Err(BuildConfigError::NotFound(path.display().to_string()));
        }

        let content = self
            .fs
            .read_file(path)
            .await
            .map_err(to_build_config_error)?;

        let config = match format {
            ConfigFormat::Json => build_config_from_json(&content),
            ConfigFormat::Yaml => build_config_from_yaml(&content),
        }
        .map_err(|e| BuildConfigError::Serialization(e.to_string()))?;

        tracing::debug!(path = %path.display(), ?format, "read vendor variables");
        Ok(config)
    }
}
