use anyhow::Result;
use clap::Parser;
use tracing::{debug, error, info};

use super::context::CliContext;
use super::dispatch::dispatch;
use super::env::CliArgs;
use super::runtime::{init_logging, load_config, LoadedConfig};

pub async fn run() -> Result<()> {
    let cli = CliArgs::parse();

    let LoadedConfig {
        config,
        path,
        from_file,
    } = load_config(cli.config.as_ref()).await?;

    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    init_logging(level, cli.debug, config.log_format)?;

    debug!("Starting objrepo v{}", env!("CARGO_PKG_VERSION"));
    if from_file {
        info!("Loaded configuration from: {}", path.display());
    } else {
        debug!("Config file not found, using defaults: {}", path.display());
    }

    let cli_context = CliContext::new(config, path);
    match dispatch(&cli, &cli_context).await {
        Ok(()) => {
            debug!("Command completed successfully");
            Ok(())
        }
        Err(err) => {
            error!("Command failed: {:#}", err);
            Err(err)
        }
    }
}
