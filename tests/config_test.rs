use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use objrepo_cli::cli::runtime::load_config;
use objrepo_cli::config::{
    LocatorConfig, LogFormat, ENV_LOG_LEVEL, ENV_POLL_INTERVAL_MS, ENV_REPOSITORY, ENV_TIMEOUT_MS,
};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_match_engine_defaults() {
    let config = LocatorConfig::default();
    assert_eq!(config.repository, PathBuf::from("Object Repository"));
    assert_eq!(config.log_format, LogFormat::Text);

    let policy = config.timeout_policy();
    assert_eq!(policy.max_duration, Duration::from_secs(30));
    assert_eq!(policy.poll_interval, Duration::from_millis(500));
    assert!(config.engine_options().invalidate_on_navigation);
}

#[test]
fn environment_overrides_file_values() {
    let mut config =
        LocatorConfig::from_yaml("timeout_ms: 5000\nlog_level: warn\ninvalidate_on_navigation: false\n")
            .unwrap();
    config
        .apply_overrides(lookup(&[
            (ENV_REPOSITORY, "/srv/qa/Object Repository"),
            (ENV_TIMEOUT_MS, " 2000 "),
            (ENV_POLL_INTERVAL_MS, "250"),
            (ENV_LOG_LEVEL, "debug"),
        ]))
        .unwrap();

    assert_eq!(config.repository, PathBuf::from("/srv/qa/Object Repository"));
    assert_eq!(config.timeout_ms, 2_000);
    assert_eq!(config.poll_interval_ms, 250);
    assert_eq!(config.log_level, "debug");

    let options = config.engine_options();
    assert!(!options.invalidate_on_navigation);
    assert_eq!(options.default_policy.max_duration, Duration::from_secs(2));
}

#[test]
fn blank_environment_values_are_ignored() {
    let mut config = LocatorConfig::default();
    config
        .apply_overrides(lookup(&[(ENV_REPOSITORY, "  "), (ENV_LOG_LEVEL, "")]))
        .unwrap();
    assert_eq!(config, LocatorConfig::default());
}

#[test]
fn malformed_millis_are_rejected() {
    let mut config = LocatorConfig::default();
    let err = config
        .apply_overrides(lookup(&[(ENV_TIMEOUT_MS, "30s")]))
        .unwrap_err();
    assert!(err.to_string().contains(ENV_TIMEOUT_MS));
}

#[test]
fn mistyped_values_in_file_are_rejected() {
    assert!(LocatorConfig::from_yaml("timeout_ms: soon\n").is_err());
    assert!(LocatorConfig::from_yaml("log_format: xml\n").is_err());
}

#[test]
fn load_config_reads_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("objrepo.yaml");
    std::fs::write(&path, "repository: fixtures/Object Repository\npoll_interval_ms: 50\n").unwrap();

    let loaded = tokio_test::block_on(load_config(Some(&path))).unwrap();
    assert!(loaded.from_file);
    assert_eq!(loaded.path, path);
    assert_eq!(loaded.config.poll_interval_ms, 50);
}

#[tokio::test]
async fn load_config_falls_back_to_defaults_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.yaml");

    let loaded = load_config(Some(&path)).await.unwrap();
    assert!(!loaded.from_file);
}
