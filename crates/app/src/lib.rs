//! Blaster Expand - command-line front end
//!
//! Loads vendor variables, expands property strings with the blaster plugin
//! policy, and reports property errors the way a build would.

pub mod cli;
pub mod settings;

use blaster_application::{
    ApplicationResult, LoadBuildConfig, ModuleContext, expand_vendor_variables,
};
use blaster_domain::{BuildConfig, VendorConfig};
use blaster_infrastructure::{
    CollectingModuleContext, FileBuildConfigRepository, SerializationError, TokioFileSystem,
    to_json_stable,
};
use serde::Serialize;

pub use cli::Cli;
pub use settings::Settings;

/// The result of expanding one input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpansionRecord {
    /// The original property string.
    pub input: String,

    /// The expanded string; empty when expansion failed.
    pub output: String,

    /// The reported property error, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Loads the vendor variables named by `settings` and applies `defines` on top.
///
/// # Errors
/// Returns an error if the vendor variables file cannot be loaded or a define
/// names an invalid variable.
pub async fn load_build_config(
    settings: &Settings,
    defines: &[(String, String)],
) -> ApplicationResult<BuildConfig> {
    let mut config = match &settings.vendor_vars {
        Some(path) => {
            let repository = FileBuildConfigRepository::new(TokioFileSystem::new());
            LoadBuildConfig::new(repository).execute(path).await?.config
        }
        None => BuildConfig::new(),
    };

    if !defines.is_empty() {
        let namespace = settings.namespace.as_str();
        let mut vendor = if config.has_namespace(namespace) {
            config.vendor_config(namespace).clone()
        } else {
            VendorConfig::new(namespace)
        };
        for (name, value) in defines {
            vendor.set(name.as_str(), value.as_str())?;
        }
        config.insert(vendor)?;
    }

    Ok(config)
}

/// Expands every input in `namespace`, pairing each with its reported error.
pub fn expand_all<I>(
    ctx: &mut CollectingModuleContext,
    namespace: &str,
    inputs: I,
) -> Vec<ExpansionRecord>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut records = Vec::new();
    for input in inputs {
        let input = input.as_ref();
        let output = expand_vendor_variables(ctx, namespace, input);
        let error = ctx
            .take_errors()
            .into_iter()
            .next()
            .map(|e| format!("{}: {}", e.module, e.message));
        records.push(ExpansionRecord {
            input: input.to_string(),
            output,
            error,
        });
    }
    records
}

/// Renders records as plain lines or as a JSON array.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render(records: &[ExpansionRecord], json: bool) -> Result<String, SerializationError> {
    if json {
        return to_json_stable(&records);
    }

    Ok(records
        .iter()
        .map(|record| format!("{}\n", record.output))
        .collect())
}

/// Creates the module context used for a run.
#[must_use]
pub fn module_context(settings: &Settings, config: BuildConfig) -> CollectingModuleContext {
    let ctx = CollectingModuleContext::new(settings.module.clone(), config);
    if !ctx.config().has_namespace(&settings.namespace) {
        tracing::warn!(
            module = ctx.module_name(),
            namespace = %settings.namespace,
            "vendor namespace not configured; every variable will be deferred"
        );
    }
    ctx
}
