use std::path::{Path, PathBuf};

use crate::config::LocatorConfig;

pub struct CliContext {
    config: LocatorConfig,
    config_path: PathBuf,
}

impl CliContext {
    pub fn new(config: LocatorConfig, config_path: PathBuf) -> Self {
        Self {
            config,
            config_path,
        }
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Repository root: the command-line override, else the configured one.
    pub fn repository(&self, overridden: Option<&Path>) -> PathBuf {
        overridden
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.config.repository.clone())
    }
}
