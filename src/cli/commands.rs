use clap::Subcommand;

use super::check::CheckArgs;
use super::config::ConfigArgs;
use super::show::ShowArgs;

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Load, validate and lint an object repository
    Check(CheckArgs),

    /// Show one descriptor and its resolution order
    Show(ShowArgs),

    /// Inspect the effective configuration
    Config(ConfigArgs),
}
