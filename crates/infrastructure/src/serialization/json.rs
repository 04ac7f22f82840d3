//! JSON helpers: vendor variable loading and deterministic output.

use blaster_domain::BuildConfig;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::VENDOR_VARS_KEY;

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Deserialize(serde_json::Error),

    /// YAML deserialization failed.
    #[error("YAML deserialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializes a value to deterministic JSON.
///
/// Output format:
/// - 2-space indentation
/// - Trailing newline
/// - Keys sorted alphabetically (requires `BTreeMap` in source types)
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let mut json = String::from_utf8(buffer)?;
    json.push('\n');
    Ok(json)
}

/// Deserializes JSON from bytes.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    serde_json::from_slice(bytes).map_err(SerializationError::Deserialize)
}

/// Reads a [`BuildConfig`] from a JSON document.
///
/// If the top-level object has a `VendorVars` key, only that value is used.
/// A null `VendorVars`, or a product variables file without one, yields an
/// empty config.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or a namespace is not a map of strings.
pub fn build_config_from_json(bytes: &[u8]) -> Result<BuildConfig, SerializationError> {
    let mut document: Value = from_json_bytes(bytes)?;
    let document = match document.get_mut(VENDOR_VARS_KEY).map(Value::take) {
        Some(vendor_vars) => vendor_vars,
        None if is_product_variables(&document) => return Ok(BuildConfig::new()),
        None => document,
    };
    if document.is_null() {
        return Ok(BuildConfig::new());
    }
    serde_json::from_value(document).map_err(SerializationError::Deserialize)
}

// An object with any non-object value cannot be a bare namespace map.
fn is_product_variables(document: &Value) -> bool {
    document
        .as_object()
        .is_some_and(|fields| !fields.values().all(Value::is_object))
}
