//! Transformer configuration.
//!
//! Loaded from YAML the same way parser configs are, or built in code.
//!
//! ```yaml
//! nested_migrate_errors: propagate
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// What a transform does with element failures while migrating a
/// list-of-records field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrateErrorPolicy {
    /// Log the failure and keep the partially populated element
    #[default]
    Discard,
    /// Stop the transform and return the element's error unchanged
    Propagate,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    pub nested_migrate_errors: MigrateErrorPolicy,
}

impl TransformConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not valid YAML
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn from_json(json: &serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(json.clone())?)
    }

    pub fn with_nested_migrate_errors(mut self, policy: MigrateErrorPolicy) -> Self {
        self.nested_migrate_errors = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_discards() {
        let config = TransformConfig::default();
        assert_eq!(config.nested_migrate_errors, MigrateErrorPolicy::Discard);
    }

    #[test]
    fn test_from_yaml_str() {
        let config = TransformConfig::from_yaml_str("nested_migrate_errors: propagate\n").unwrap();
        assert_eq!(config.nested_migrate_errors, MigrateErrorPolicy::Propagate);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = TransformConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, TransformConfig::default());
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let result = TransformConfig::from_yaml_str("nested_migrate_errors: explode\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fieldwise.yaml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"nested_migrate_errors: propagate\n").unwrap();

        let config = TransformConfig::load_from_file(&path).unwrap();
        assert_eq!(config.nested_migrate_errors, MigrateErrorPolicy::Propagate);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = TransformConfig::load_from_file(temp_dir.path().join("absent.yaml"));

        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_from_json() {
        let config = TransformConfig::from_json(&json!({"nested_migrate_errors": "discard"})).unwrap();
        assert_eq!(config.nested_migrate_errors, MigrateErrorPolicy::Discard);
    }
}
