//! Module context port
//!
//! The slice of the host build system a plugin sees while processing one
//! module: its vendor configuration and a channel for property errors.

use blaster_domain::VariableSource;

/// Per-module view of the host build system.
pub trait ModuleContext {
    /// Name of the module being processed, for diagnostics.
    fn module_name(&self) -> &str;

    /// Returns the vendor variables published under `namespace`.
    ///
    /// Unknown namespaces behave as an empty source.
    fn vendor_config(&self, namespace: &str) -> &dyn VariableSource;

    /// Reports a problem with one of the module's properties.
    ///
    /// Reporting does not abort anything; the host decides whether the build
    /// fails.
    fn property_error(&mut self, message: String);
}
