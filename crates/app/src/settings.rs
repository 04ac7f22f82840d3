//! Layered settings for the command-line tool.
//!
//! Precedence, lowest first: built-in defaults, the settings file, `BLASTER_*`
//! environment variables, command-line flags.

use std::path::PathBuf;

use blaster_application::BLASTER_VARS_PLUGIN;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::cli::Cli;

/// Settings file looked up in the working directory when `--config` is absent.
pub const DEFAULT_SETTINGS_FILE: &str = "blaster-expand";

/// Resolved tool settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Vendor variables file; no file means every name is unbound.
    pub vendor_vars: Option<PathBuf>,

    /// Vendor namespace to expand against.
    pub namespace: String,

    /// Module name used in diagnostics.
    pub module: String,

    /// `tracing` filter directive.
    pub log: String,
}

impl Settings {
    /// Loads settings for the given command line.
    ///
    /// # Errors
    /// Returns an error if an explicit settings file is missing or any layer is malformed.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        };

        Config::builder()
            .set_default("namespace", BLASTER_VARS_PLUGIN)?
            .set_default("module", "blaster_expand")?
            .set_default("log", "warn")?
            .add_source(file)
            .add_source(Environment::with_prefix("BLASTER"))
            .set_override_option(
                "vendor_vars",
                cli.vendor_vars.as_ref().map(|p| p.display().to_string()),
            )?
            .set_override_option("namespace", cli.namespace.clone())?
            .set_override_option("module", cli.module.clone())?
            .build()?
            .try_deserialize()
    }
}
