//! CLI command implementations.
//!
//! - `run`: execute a suite once and print the report
//! - `list`: show the scenarios in a suite
//! - `soak`: repeat a suite and write per-iteration data

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use r10k_acceptance::scenario::{self, Scenario};
use r10k_acceptance::{Harness, HarnessConfig, ResourceCheck};
use std::path::{Path, PathBuf};

pub mod list;
pub mod run;
pub mod soak;

/// Acceptance tests for the vagrant-r10k plugin
#[derive(Parser)]
#[command(name = "r10k-acceptance")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file
    ///
    /// Defaults to r10k-acceptance.toml in the current directory, if present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Vagrant provider, overriding the configuration
    #[arg(long, global = true)]
    pub provider: Option<String>,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the acceptance scenarios once
    Run(run::RunArgs),

    /// List scenarios
    List(list::ListArgs),

    /// Run the suite repeatedly to hunt for flaky failures
    Soak(soak::SoakArgs),
}

/// Loads the configuration and applies command-line overrides.
pub fn load_config(cli: &Cli) -> Result<HarnessConfig> {
    let mut config = match &cli.config {
        Some(path) => HarnessConfig::load_from(path)?,
        None => HarnessConfig::load()?,
    };
    if let Some(provider) = &cli.provider {
        config.provider = provider.clone();
    }
    Ok(config)
}

/// Loads the suite file, or the built-in suite, and filters it by name.
pub fn load_scenarios(suite: Option<&Path>, names: &[String]) -> Result<Vec<Scenario>> {
    let scenarios = match suite {
        Some(path) => scenario::load_suite(path)
            .with_context(|| format!("failed to load suite {}", path.display()))?,
        None => scenario::builtin_suite()?,
    };
    Ok(scenario::select(scenarios, names)?)
}

/// Builds a harness after checking that vagrant and the fixtures are present.
pub fn build_harness(cli: &Cli) -> Result<Harness> {
    let config = load_config(cli)?;

    let check = ResourceCheck::probe(&config);
    if !check.all_ready() {
        anyhow::bail!("missing resources: {}", check.missing().join(", "));
    }

    Harness::new(config).context("invalid configuration")
}
