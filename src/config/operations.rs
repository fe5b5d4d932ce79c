//! Config loading and validation.

use super::model::Config;
use crate::error::{PatchsubError, Result};
use crate::rules::RuleSet;
use std::path::Path;

impl Config {
    /// Load config from a YAML rules file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PatchsubError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PatchsubError::UserError(format!(
                "failed to read rules file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load from `path` if given, otherwise use the built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PatchsubError::UserError(format!("failed to parse rules YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PatchsubError::UserError(format!("failed to serialize rules to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - every rule's `match` must be non-empty
    /// - `output_suffix` must be non-empty and must not contain a path separator
    pub fn validate(&self) -> Result<()> {
        if let Some(index) = self.rules.iter().position(|r| r.pattern.is_empty()) {
            return Err(PatchsubError::UserError(format!(
                "config validation failed: rule {} has an empty 'match'",
                index + 1
            )));
        }

        if self.output_suffix.is_empty() {
            return Err(PatchsubError::UserError(
                "config validation failed: output_suffix must be non-empty".to_string(),
            ));
        }

        if self.output_suffix.contains('/') || self.output_suffix.contains('\\') {
            return Err(PatchsubError::UserError(format!(
                "config validation failed: output_suffix must not contain a path separator (found '{}')",
                self.output_suffix
            )));
        }

        Ok(())
    }

    /// The configured rules as an ordered rule set.
    pub fn rule_set(&self) -> RuleSet {
        RuleSet::new(self.rules.clone())
    }
}
