//! Locator configuration
//!
//! Defaults, then the YAML file, then `OBJREPO_*` environment overrides.
//! Timing is engine-wide: descriptors carry no timeout of their own.

use std::path::PathBuf;
use std::time::Duration;

use action_locator::{EngineOptions, TimeoutPolicy};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const ENV_REPOSITORY: &str = "OBJREPO_REPOSITORY";
pub const ENV_TIMEOUT_MS: &str = "OBJREPO_TIMEOUT_MS";
pub const ENV_POLL_INTERVAL_MS: &str = "OBJREPO_POLL_INTERVAL_MS";
pub const ENV_LOG_LEVEL: &str = "OBJREPO_LOG_LEVEL";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorConfig {
    /// Object repository root.
    pub repository: PathBuf,
    pub timeout_ms: u64,
    pub poll_interval_ms: u64,
    pub invalidate_on_navigation: bool,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            repository: PathBuf::from("Object Repository"),
            timeout_ms: 30_000,
            poll_interval_ms: 500,
            invalidate_on_navigation: true,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl LocatorConfig {
    pub fn from_yaml(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw).context("Failed to parse config file")
    }

    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup (the process environment
    /// in production).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(repository) = lookup(ENV_REPOSITORY).filter(|v| !v.trim().is_empty()) {
            self.repository = PathBuf::from(repository);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            self.timeout_ms = parse_millis(ENV_TIMEOUT_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_POLL_INTERVAL_MS) {
            self.poll_interval_ms = parse_millis(ENV_POLL_INTERVAL_MS, &raw)?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.trim().is_empty()) {
            self.log_level = level.trim().to_string();
        }
        Ok(())
    }

    pub fn timeout_policy(&self) -> TimeoutPolicy {
        TimeoutPolicy::new(
            Duration::from_millis(self.timeout_ms),
            Duration::from_millis(self.poll_interval_ms),
        )
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            default_policy: self.timeout_policy(),
            invalidate_on_navigation: self.invalidate_on_navigation,
        }
    }
}

fn parse_millis(key: &str, raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .with_context(|| format!("{} must be a number of milliseconds, got '{}'", key, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = LocatorConfig::from_yaml("timeout_ms: 5000\nlog_format: json\n").unwrap();
        assert_eq!(config.timeout_ms, 5_000);
        assert_eq!(config.poll_interval_ms, 500);
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.invalidate_on_navigation);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(LocatorConfig::from_yaml("  \n").unwrap(), LocatorConfig::default());
    }
}
