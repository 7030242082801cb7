use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Args;
use object_repository::{load_all, ElementDescriptor, SelectorCandidate};
use serde::Serialize;

use crate::cli::context::CliContext;

#[derive(Args, Clone, Debug)]
pub struct ShowArgs {
    /// Element id or repository path (e.g. Pages/Login/txt_Email)
    pub target: String,

    /// Object repository root (defaults to the configured repository)
    #[arg(long, value_name = "DIR")]
    pub repo: Option<PathBuf>,

    /// Print the descriptor as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ShowView<'a> {
    descriptor: &'a ElementDescriptor,
    resolution_order: Vec<SelectorCandidate>,
    timeout_ms: u64,
    poll_interval_ms: u64,
}

pub async fn cmd_show(args: ShowArgs, ctx: &CliContext) -> Result<()> {
    let root = ctx.repository(args.repo.as_deref());
    let repository = load_all(&root)
        .with_context(|| format!("Object repository {} failed to load", root.display()))?;

    let descriptor = repository
        .find(&args.target)
        .ok_or_else(|| anyhow!("descriptor '{}' not found in {}", args.target, root.display()))?;

    let resolution_order: Vec<SelectorCandidate> = descriptor
        .resolution_order()
        .into_iter()
        .map(|(strategy, expression)| SelectorCandidate {
            strategy,
            expression: expression.to_string(),
        })
        .collect();

    let config = ctx.config();
    if args.json {
        let view = ShowView {
            descriptor: &descriptor,
            resolution_order,
            timeout_ms: config.timeout_ms,
            poll_interval_ms: config.poll_interval_ms,
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}", descriptor.label());
    if let Some(path) = descriptor.repository_path() {
        println!("  path:        {}", path);
    }
    if !descriptor.description().is_empty() {
        println!("  description: {}", descriptor.description());
    }
    if let Some(tag) = descriptor.tag() {
        println!("  tag:         {}", tag);
    }
    println!(
        "  polling:     every {}ms for up to {}ms",
        config.poll_interval_ms, config.timeout_ms
    );
    println!("  resolution order:");
    for (position, candidate) in resolution_order.iter().enumerate() {
        println!(
            "    {}. {:<5} {}",
            position + 1,
            candidate.strategy.name(),
            candidate.expression
        );
    }
    Ok(())
}
