//! Tests for config functionality.

use crate::config::{Config, DEFAULT_OUTPUT_SUFFIX};
use crate::error::PatchsubError;
use crate::rules::{Rule, RuleSet};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.output_suffix, DEFAULT_OUTPUT_SUFFIX);
    assert_eq!(config.rule_set(), RuleSet::builtin());
}

#[test]
fn test_parse_empty_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_rules_only() {
    let yaml = r#"
rules:
  - match: "colour"
    replacement: "color"
  - { match: "Colour", replacement: "Color" }
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(
        config.rules,
        vec![Rule::new("colour", "color"), Rule::new("Colour", "Color")]
    );
    assert_eq!(config.output_suffix, ".new");
}

#[test]
fn test_parse_suffix_only_keeps_builtin_rules() {
    let config = Config::from_yaml("output_suffix: .rewritten\n").unwrap();

    assert_eq!(config.output_suffix, ".rewritten");
    assert_eq!(config.rule_set(), RuleSet::builtin());
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
output_suffix: .out
future_option: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.output_suffix, ".out");
}

#[test]
fn test_empty_rule_list_is_allowed() {
    let config = Config::from_yaml("rules: []\n").unwrap();
    assert!(config.rule_set().is_empty());
}

#[test]
fn test_empty_match_is_rejected() {
    let yaml = r#"
rules:
  - { match: "a", replacement: "b" }
  - { match: "", replacement: "x" }
"#;
    let err = Config::from_yaml(yaml).unwrap_err();

    assert!(matches!(err, PatchsubError::UserError(_)));
    assert!(err.to_string().contains("rule 2"));
}

#[test]
fn test_bad_suffix_is_rejected() {
    assert!(Config::from_yaml("output_suffix: \"\"\n").is_err());
    assert!(Config::from_yaml("output_suffix: /tmp/x\n").is_err());
}

#[test]
fn test_malformed_yaml_is_rejected() {
    let err = Config::from_yaml("rules: [ {match: }").unwrap_err();
    assert!(err.to_string().contains("failed to parse rules YAML"));
}

#[test]
fn test_yaml_roundtrip_uses_match_key() {
    let config = Config {
        output_suffix: ".new".to_string(),
        rules: vec![Rule::new("floor", "level")],
    };

    let yaml = config.to_yaml().unwrap();
    assert!(yaml.contains("match: floor"));
    assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rules.yaml");
    fs::write(&path, "rules:\n  - { match: a, replacement: b }\n").unwrap();

    let config = Config::load_or_default(Some(&path)).unwrap();
    assert_eq!(config.rules, vec![Rule::new("a", "b")]);
}

#[test]
fn test_load_missing_file_is_user_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load(temp_dir.path().join("nope.yaml")).unwrap_err();

    assert!(matches!(err, PatchsubError::UserError(_)));
    assert!(err.to_string().contains("nope.yaml"));
}

#[test]
fn test_no_path_uses_defaults() {
    let config = Config::load_or_default(None::<&str>).unwrap();
    assert_eq!(config, Config::default());
}
