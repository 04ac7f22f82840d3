//! YAML vendor variable loading.

use blaster_domain::BuildConfig;
use serde_yaml::Value;

use super::VENDOR_VARS_KEY;
use super::json::SerializationError;

/// Reads a [`BuildConfig`] from a YAML document.
///
/// Accepts the same two shapes as
/// [`build_config_from_json`](super::build_config_from_json).
///
/// # Errors
///
/// Returns an error if the YAML is invalid or a namespace is not a map of strings.
pub fn build_config_from_yaml(bytes: &[u8]) -> Result<BuildConfig, SerializationError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(BuildConfig::new());
    }
    let mut document: Value = serde_yaml::from_slice(bytes)?;
    let document = match document.get_mut(VENDOR_VARS_KEY).map(std::mem::take) {
        Some(vendor_vars) => vendor_vars,
        None if is_product_variables(&document) => return Ok(BuildConfig::new()),
        None => document,
    };
    if document.is_null() {
        return Ok(BuildConfig::new());
    }
    Ok(serde_yaml::from_value(document)?)
}

fn is_product_variables(document: &Value) -> bool {
    document
        .as_mapping()
        .is_some_and(|fields| !fields.values().all(Value::is_mapping))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use blaster_domain::VariableSource;

    #[test]
    fn test_yaml_product_variables() {
        let yaml = b"VendorVars:\n  blasterVarsPlugin:\n    VENDOR_ROOT: /vendor\n";

        let config = build_config_from_yaml(yaml).unwrap();
        assert_eq!(
            config.vendor_config("blasterVarsPlugin").value("VENDOR_ROOT"),
            "/vendor"
        );
    }

    #[test]
    fn test_yaml_bare_map() {
        let yaml = b"blasterVarsPlugin:\n  ARCH: arm64\n";

        let config = build_config_from_yaml(yaml).unwrap();
        assert!(config.vendor_config("blasterVarsPlugin").is_set("ARCH"));
    }

    #[test]
    fn test_empty_yaml_document() {
        let config = build_config_from_yaml(b"").unwrap();
        assert_eq!(config.namespaces().count(), 0);
    }

    #[test]
    fn test_yaml_null_vendor_vars_is_empty() {
        let config = build_config_from_yaml(b"Platform_sdk_version: 34\nVendorVars: ~\n").unwrap();
        assert_eq!(config.namespaces().count(), 0);
    }

    #[test]
    fn test_yaml_product_variables_without_vendor_vars_is_empty() {
        let config = build_config_from_yaml(b"Platform_sdk_version: 34\nProduct_name: x\n").unwrap();
        assert_eq!(config.namespaces().count(), 0);
    }

    #[test]
    fn test_yaml_rejects_bad_variable_name() {
        let yaml = b"ns:\n  \"a)b\": x\n";
        assert!(matches!(
            build_config_from_yaml(yaml),
            Err(SerializationError::Yaml(_))
        ));
    }
}
