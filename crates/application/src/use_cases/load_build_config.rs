//! Load build configuration use case

use std::path::Path;

use blaster_domain::BuildConfig;

use crate::ports::{BuildConfigError, BuildConfigRepository};

/// Errors that can occur when loading a build configuration.
#[derive(Debug, thiserror::Error)]
pub enum LoadBuildConfigError {
    /// Configuration file not found.
    #[error("Build config not found: {0}")]
    NotFound(String),

    /// Failed to read the configuration file.
    #[error("Failed to read build config: {0}")]
    IoError(String),

    /// Failed to parse the configuration file.
    #[error("Failed to parse build config: {0}")]
    ParseError(String),
}

impl From<BuildConfigError> for LoadBuildConfigError {
    fn from(error: BuildConfigError) -> Self {
        match error {
            BuildConfigError::NotFound(path) => Self::NotFound(path),
            BuildConfigError::Io(e) => Self::IoError(e.to_string()),
            BuildConfigError::Serialization(e) => Self::ParseError(e),
            BuildConfigError::UnsupportedFormat(ext) => {
                Self::ParseError(format!("unsupported format: {ext}"))
            }
        }
    }
}

/// Output containing the loaded configuration.
#[derive(Debug)]
pub struct LoadBuildConfigOutput {
    /// The loaded configuration.
    pub config: BuildConfig,
}

/// Loads vendor variables from disk.
pub struct LoadBuildConfig<R> {
    repository: R,
}

impl<R: BuildConfigRepository> LoadBuildConfig<R> {
    /// Creates a new `LoadBuildConfig` use case.
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Executes the use case.
    ///
    /// # Arguments
    /// * `path` - Path to a JSON or YAML vendor variables file
    ///
    /// # Errors
    /// Returns an error if the configuration cannot be loaded.
    pub async fn execute(&self, path: &Path) -> Result<LoadBuildConfigOutput, LoadBuildConfigError> {
        let config = self.repository.load(path).await?;

        tracing::debug!(
            path = %path.display(),
            namespaces = ?config.namespaces().collect::<Vec<_>>(),
            "loaded build config"
        );

        Ok(LoadBuildConfigOutput { config })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use blaster_domain::{VariableSource, VendorConfig};
    use std::collections::HashMap;
    use std::path::PathBuf;

    struct MockRepository {
        configs: HashMap<PathBuf, BuildConfig>,
    }

    #[async_trait]
    impl BuildConfigRepository for MockRepository {
        async fn load(&self, path: &Path) -> Result<BuildConfig, BuildConfigError> {
            self.configs
                .get(path)
                .cloned()
                .ok_or_else(|| BuildConfigError::NotFound(path.display().to_string()))
        }
    }

    fn repository() -> MockRepository {
        let vendor = VendorConfig::with_variables("blasterVarsPlugin", [("A", "1")]).unwrap();
        let config = BuildConfig::new().with_vendor_config(vendor).unwrap();
        MockRepository {
            configs: HashMap::from([(PathBuf::from("vars.json"), config)]),
        }
    }

    #[tokio::test]
    async fn test_load_existing() {
        let use_case = LoadBuildConfig::new(repository());

        let output = use_case.execute(Path::new("vars.json")).await.unwrap();

        assert!(output.config.vendor_config("blasterVarsPlugin").is_set("A"));
    }

    #[tokio::test]
    async fn test_load_missing() {
        let use_case = LoadBuildConfig::new(repository());

        let result = use_case.execute(Path::new("missing.json")).await;

        assert!(matches!(result, Err(LoadBuildConfigError::NotFound(p)) if p == "missing.json"));
    }

    #[test]
    fn test_error_conversion() {
        let err = LoadBuildConfigError::from(BuildConfigError::Serialization("bad".to_string()));
        assert!(matches!(err, LoadBuildConfigError::ParseError(msg) if msg == "bad"));

        let err = LoadBuildConfigError::from(BuildConfigError::UnsupportedFormat("toml".into()));
        assert_eq!(err.to_string(), "Failed to parse build config: unsupported format: toml");
    }
}
