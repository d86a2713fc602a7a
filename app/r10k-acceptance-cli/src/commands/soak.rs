//! Soak command implementation.

use super::Cli;
use anyhow::{Context, Result};
use clap::Args;
use r10k_acceptance::soak;
use std::path::PathBuf;

/// Arguments for the soak command.
#[derive(Args)]
pub struct SoakArgs {
    /// Number of suite runs
    #[arg(short = 'n', long, default_value_t = 10)]
    pub iterations: usize,

    /// Directory for data_<n>.json, results_<n>.json and summary.json
    #[arg(long, default_value = "soak-results")]
    pub out_dir: PathBuf,

    /// TOML suite file (defaults to the built-in suite)
    #[arg(long)]
    pub suite: Option<PathBuf>,

    /// Only run the named scenario (repeatable)
    #[arg(long = "scenario", value_name = "NAME")]
    pub scenarios: Vec<String>,
}

/// Executes the soak command. Returns whether every iteration passed.
pub async fn execute(cli: &Cli, args: &SoakArgs) -> Result<bool> {
    if args.iterations == 0 {
        anyhow::bail!("--iterations must be at least 1");
    }

    let scenarios = super::load_scenarios(args.suite.as_deref(), &args.scenarios)?;
    let harness = super::build_harness(cli)?;

    let summary = soak::run(&harness, &scenarios, args.iterations, &args.out_dir)
        .await
        .with_context(|| format!("failed to write soak data to {}", args.out_dir.display()))?;

    println!(
        "{}/{} iterations passed",
        summary.iterations_passed, summary.iterations_run
    );
    for (name, totals) in &summary.per_scenario {
        println!(
            "  {name}: {} passed, {} failed, {} errored",
            totals.passed, totals.failed, totals.errored
        );
    }
    if let Some(reason) = &summary.aborted {
        println!("ABORTED: {reason}");
    }

    Ok(summary.aborted.is_none() && summary.iterations_passed == summary.iterations_run)
}
