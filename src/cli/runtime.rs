use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::fs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LocatorConfig, LogFormat};

pub fn init_logging(level: &str, debug: bool, format: LogFormat) -> Result<()> {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        level.parse().context("Invalid log level")?
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr; stdout is reserved for command output.
    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }

    Ok(())
}

pub struct LoadedConfig {
    pub config: LocatorConfig,
    pub path: PathBuf,
    /// False when the file did not exist and defaults were used.
    pub from_file: bool,
}

/// Default lookup: ./config/objrepo.yaml, then <config dir>/objrepo/config.yaml.
pub fn default_config_path() -> Result<PathBuf> {
    let local_config = PathBuf::from("config/objrepo.yaml");
    if local_config.exists() {
        return Ok(local_config);
    }
    let mut path = dirs::config_dir().context("Failed to get config directory")?;
    path.push("objrepo");
    path.push("config.yaml");
    Ok(path)
}

/// Load the configuration file (a missing file means defaults) and apply
/// environment overrides. Runs before logging is initialised, so callers
/// report the outcome themselves.
pub async fn load_config(config_path: Option<&PathBuf>) -> Result<LoadedConfig> {
    let path = match config_path {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    let (mut config, from_file) = if fs::try_exists(&path).await.unwrap_or(false) {
        let content = fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = LocatorConfig::from_yaml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        (config, true)
    } else {
        (LocatorConfig::default(), false)
    };

    config.apply_env_overrides()?;
    Ok(LoadedConfig {
        config,
        path,
        from_file,
    })
}
