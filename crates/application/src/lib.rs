//! Blaster Application - Expansion engine, use cases and ports
//!
//! This crate defines the application layer with:
//! - The `$(name)` variable expander
//! - The deferred-resolution policy used by the blaster plugin
//! - Port traits (interfaces for the host build system and storage)
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod use_cases;
pub mod variable_expander;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{BuildConfigError, BuildConfigRepository, FileSystem, FileSystemError, ModuleContext};
pub use use_cases::{
    BLASTER_VARS_PLUGIN, Expansion, LoadBuildConfig, LoadBuildConfigError, LoadBuildConfigOutput,
    VendorVariableExpander, defer_unbound, expand_blaster_variables, expand_vendor_variables,
};
pub use variable_expander::{ExpandError, expand, expand_preserving_escapes};
