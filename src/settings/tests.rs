//! Tests for settings.

use crate::error::GenError;
use crate::settings::{Settings, DEFAULT_TEMPLATE};
use crate::template::MatchPolicy;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_default_settings() {
    let settings = Settings::default();

    assert_eq!(settings.templates, vec![DEFAULT_TEMPLATE]);
    assert_eq!(settings.fetch.max_retries, 3);
    assert_eq!(settings.fetch.timeout_secs, 30);
    assert_eq!(settings.match_policy, MatchPolicy::FirstOnly);
}

#[test]
fn test_parse_empty_yaml() {
    let settings = Settings::from_yaml("").unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
fetch:
  max_retries: 5
match_policy: all
"#;
    let settings = Settings::from_yaml(yaml).unwrap();

    assert_eq!(settings.fetch.max_retries, 5);
    assert_eq!(settings.fetch.timeout_secs, 30);
    assert_eq!(settings.match_policy, MatchPolicy::All);
    assert_eq!(settings.templates, vec![DEFAULT_TEMPLATE]);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
templates:
  - templates/GridSearch.DoubleCouple.py
  - https://example.com/GridSearch.FullMomentTensor.py
fetch:
  max_retries: 1
  timeout_secs: 5
  initial_backoff_ms: 100
  max_backoff_ms: 400
match_policy: first_only
"#;
    let settings = Settings::from_yaml(yaml).unwrap();

    assert_eq!(settings.templates.len(), 2);
    assert_eq!(settings.fetch.timeout(), Duration::from_secs(5));

    let policy = settings.fetch.retry_policy();
    assert_eq!(policy.max_retries, 1);
    assert_eq!(policy.initial_backoff, Duration::from_millis(100));
    assert_eq!(policy.max_backoff, Duration::from_millis(400));
}

#[test]
fn test_unknown_fields_ignored() {
    let settings = Settings::from_yaml("future_option: true\n").unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_invalid_match_policy_rejected() {
    let err = Settings::from_yaml("match_policy: sometimes\n").unwrap_err();
    assert!(matches!(err, GenError::Precondition(_)));
}

#[test]
fn test_empty_template_list_rejected() {
    let err = Settings::from_yaml("templates: []\n").unwrap_err();
    assert!(err.to_string().contains("at least one template"));
}

#[test]
fn test_blank_template_rejected() {
    let err = Settings::from_yaml("templates: ['  ']\n").unwrap_err();
    assert!(err.to_string().contains("must be non-empty"));
}

#[test]
fn test_zero_timeout_rejected() {
    let err = Settings::from_yaml("fetch:\n  timeout_secs: 0\n").unwrap_err();
    assert!(err.to_string().contains("timeout_secs"));
}

#[test]
fn test_backoff_bounds_checked() {
    let yaml = "fetch:\n  initial_backoff_ms: 2000\n  max_backoff_ms: 1000\n";
    let err = Settings::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("initial_backoff_ms"));
}

#[test]
fn test_cli_templates_override() {
    let settings = Settings::default().with_templates(vec!["local.py".to_string()]);
    assert_eq!(settings.templates, vec!["local.py"]);

    let settings = Settings::default().with_templates(Vec::new());
    assert_eq!(settings.templates, vec![DEFAULT_TEMPLATE]);
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("mtgen.yaml");
    std::fs::write(&path, "templates:\n  - a.py\n").unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.templates, vec!["a.py"]);
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = Settings::load(temp_dir.path().join("absent.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read settings file"));
}
