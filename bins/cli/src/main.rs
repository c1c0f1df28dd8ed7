//! Tally command-line tool
//!
//! Formats amounts, tax rates and dates with the configured system settings.

mod cli;
mod commands;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tally_core::Formatter;
use tally_shared::AppConfig;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for output
    let default_filter = if cli.verbose {
        "tally=debug,tally_core=debug,tally_shared=debug"
    } else {
        "tally=info,tally_core=warn,tally_shared=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config =
        AppConfig::load_with(cli.config.as_deref()).context("Failed to load configuration")?;
    let formatter = Formatter::from_config(&config).context("Invalid system settings")?;
    tracing::debug!(
        default_currency = %formatter.default_currency().code,
        rounding = %formatter.rounding().method,
        "Formatter ready"
    );

    let output = commands::run(&cli.command, &formatter)?;
    println!("{output}");

    Ok(())
}
