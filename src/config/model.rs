//! Config struct definition and default implementation.

use crate::rules::{Rule, RuleSet};
use serde::{Deserialize, Serialize};

/// Suffix appended to each input path to name its rewritten artifact.
pub const DEFAULT_OUTPUT_SUFFIX: &str = ".new";

/// Contents of a rules file.
///
/// ```yaml
/// output_suffix: ".new"
/// rules:
///   - { match: "floor", replacement: "level" }
///   - { match: "Math.level", replacement: "Math.floor" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Suffix for output artifacts (default: ".new").
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,

    /// Substitution rules, applied in listed order.
    #[serde(default = "default_rules")]
    pub rules: Vec<Rule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_suffix: default_output_suffix(),
            rules: default_rules(),
        }
    }
}

fn default_output_suffix() -> String {
    DEFAULT_OUTPUT_SUFFIX.to_string()
}

fn default_rules() -> Vec<Rule> {
    RuleSet::builtin().rules().to_vec()
}
