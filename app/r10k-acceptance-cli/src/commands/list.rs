//! List command implementation.

use anyhow::Result;
use clap::Args;
use r10k_acceptance::runner::RunMode;
use std::path::PathBuf;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// TOML suite file (defaults to the built-in suite)
    #[arg(long)]
    pub suite: Option<PathBuf>,
}

/// Executes the list command.
pub fn execute(args: &ListArgs) -> Result<bool> {
    let scenarios = super::load_scenarios(args.suite.as_deref(), &[])?;

    println!("{:<48} {:<26} MODE", "SCENARIO", "FIXTURE");
    for scenario in &scenarios {
        let mode = match scenario.mode {
            RunMode::Strict => "strict",
            RunMode::Tolerant => "tolerant",
        };
        println!("{:<48} {:<26} {}", scenario.name, scenario.fixture, mode);
    }

    Ok(true)
}
