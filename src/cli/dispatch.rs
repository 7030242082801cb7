use super::check::cmd_check;
use super::config::cmd_config;
use super::show::cmd_show;
use crate::cli::commands::Commands;
use crate::cli::context::CliContext;
use crate::cli::env::CliArgs;
use anyhow::Result;

pub async fn dispatch(cli: &CliArgs, ctx: &CliContext) -> Result<()> {
    match cli.command.clone() {
        Commands::Check(args) => cmd_check(args, ctx).await,
        Commands::Show(args) => cmd_show(args, ctx).await,
        Commands::Config(args) => cmd_config(args, ctx).await,
    }
}
