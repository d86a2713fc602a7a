//! Run command implementation.

use super::Cli;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// TOML suite file (defaults to the built-in suite)
    #[arg(long)]
    pub suite: Option<PathBuf>,

    /// Only run the named scenario (repeatable)
    #[arg(long = "scenario", value_name = "NAME")]
    pub scenarios: Vec<String>,

    /// Write the JSON report to this file
    #[arg(long)]
    pub report: Option<PathBuf>,
}

/// Executes the run command. Returns whether every scenario passed.
pub async fn execute(cli: &Cli, args: &RunArgs) -> Result<bool> {
    let scenarios = super::load_scenarios(args.suite.as_deref(), &args.scenarios)?;
    let harness = super::build_harness(cli)?;

    let report = harness.run_suite(&scenarios).await;
    print!("{}", report.render());

    if let Some(path) = &args.report {
        report
            .write_json(path)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        tracing::info!("report written to {}", path.display());
    }

    Ok(report.passed())
}
