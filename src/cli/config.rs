use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::context::CliContext;

#[derive(Args, Clone, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Clone, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration as YAML
    Show,
    /// Print the configuration file location
    Path,
}

pub async fn cmd_config(args: ConfigArgs, ctx: &CliContext) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            print!("{}", serde_yaml::to_string(ctx.config())?);
        }
        ConfigAction::Path => {
            println!("{}", ctx.config_path().display());
        }
    }
    Ok(())
}
