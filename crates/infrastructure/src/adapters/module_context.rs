//! In-memory module context.
//!
//! Stands in for the host build system when expanding properties outside a
//! real build: vendor variables come from a loaded [`BuildConfig`] and
//! property errors are collected instead of failing the build.

use blaster_application::ports::ModuleContext;
use blaster_domain::{BuildConfig, VariableSource};
use serde::Serialize;

/// A property error reported against a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyError {
    /// The module the property belongs to.
    pub module: String,
    /// The formatted diagnostic.
    pub message: String,
}

/// Module context that records property errors in memory.
#[derive(Debug, Clone)]
pub struct CollectingModuleContext {
    module_name: String,
    config: BuildConfig,
    errors: Vec<PropertyError>,
}

impl CollectingModuleContext {
    /// Creates a context for `module_name` reading from `config`.
    #[must_use]
    pub fn new(module_name: impl Into<String>, config: BuildConfig) -> Self {
        Self {
            module_name: module_name.into(),
            config,
            errors: Vec::new(),
        }
    }

    /// Returns the build configuration.
    #[must_use]
    pub const fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Returns the errors reported so far.
    #[must_use]
    pub fn errors(&self) -> &[PropertyError] {
        &self.errors
    }

    /// Returns true if any error was reported.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Removes and returns the errors reported so far.
    pub fn take_errors(&mut self) -> Vec<PropertyError> {
        std::mem::take(&mut self.errors)
    }
}

impl ModuleContext for CollectingModuleContext {
    fn module_name(&self) -> &str {
        &self.module_name
    }

    fn vendor_config(&self, namespace: &str) -> &dyn VariableSource {
        self.config.vendor_config(namespace)
    }

    fn property_error(&mut self, message: String) {
        self.errors.push(PropertyError {
            module: self.module_name.clone(),
            message,
        });
    }
}
