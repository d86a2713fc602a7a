//! r10k-acceptance - acceptance test runner for the vagrant-r10k plugin.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "r10k_acceptance=debug,r10k_acceptance_cli=debug"
    } else {
        "r10k_acceptance=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let passed = match &cli.command {
        Commands::Run(args) => commands::run::execute(&cli, args).await?,
        Commands::List(args) => commands::list::execute(args)?,
        Commands::Soak(args) => commands::soak::execute(&cli, args).await?,
    };

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
