use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use object_repository::load_all;
use objrepo_core_types::StrategyKind;
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::context::CliContext;

#[derive(Args, Clone, Debug)]
pub struct CheckArgs {
    /// Object repository root (defaults to the configured repository)
    #[arg(long, value_name = "DIR")]
    pub repo: Option<PathBuf>,

    /// Fail when the selector lint reports warnings
    #[arg(long)]
    pub deny_warnings: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    root: PathBuf,
    descriptors: usize,
    strategies: BTreeMap<StrategyKind, usize>,
    warnings: Vec<String>,
}

pub async fn cmd_check(args: CheckArgs, ctx: &CliContext) -> Result<()> {
    let root = ctx.repository(args.repo.as_deref());
    info!(root = %root.display(), "Checking object repository");

    let repository = load_all(&root)
        .with_context(|| format!("Object repository {} failed to load", root.display()))?;

    let mut strategies = BTreeMap::new();
    for descriptor in repository.iter() {
        for (kind, _) in descriptor.selectors().iter() {
            *strategies.entry(kind).or_insert(0usize) += 1;
        }
    }

    let warnings: Vec<String> = repository
        .lint()
        .into_iter()
        .map(|warning| warning.to_string())
        .collect();
    for warning in &warnings {
        warn!("{}", warning);
    }

    let report = CheckReport {
        root,
        descriptors: repository.len(),
        strategies,
        warnings,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Loaded {} descriptors from {}",
            report.descriptors,
            report.root.display()
        );
        for (kind, count) in &report.strategies {
            println!("  {:<6} {}", kind.name(), count);
        }
        if report.warnings.is_empty() {
            println!("No lint warnings");
        } else {
            println!("{} lint warning(s):", report.warnings.len());
            for warning in &report.warnings {
                println!("  - {}", warning);
            }
        }
    }

    if args.deny_warnings && !report.warnings.is_empty() {
        bail!(
            "{} lint warning(s) with --deny-warnings",
            report.warnings.len()
        );
    }
    Ok(())
}
