//! Serialization helpers for vendor variable files and CLI output.
//!
//! Vendor variables are read either from a product variables file, where they
//! live under the `VendorVars` key, or from a bare `namespace -> variables` map.

mod json;
mod yaml;

pub use json::*;
pub use yaml::*;

/// Key holding vendor namespaces in a product variables file.
pub const VENDOR_VARS_KEY: &str = "VendorVars";
