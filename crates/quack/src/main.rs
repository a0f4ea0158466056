//! Quack Integrations - Entry Point
//!
//! Binary entry point for the `quack` command line interface.

// Force-link quack-providers to ensure linkme registrations are included
extern crate quack_providers;

use anyhow::Context;
use clap::Parser;
use quack::cli::{Cli, execute, load_config};
use quack_infrastructure::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(config.logging.clone()).context("Failed to initialize logging")?;

    let output = execute(&cli.command, &config).await?;
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
