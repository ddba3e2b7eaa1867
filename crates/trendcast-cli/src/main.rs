//! Trendcast CLI - project historical series into the future.
//!
//! # Usage
//!
//! ```bash
//! # Project a sample dataset with the default linear model
//! trendcast predict --dataset steady-increase
//!
//! # Fit a cubic to a CSV file and show history alongside the projection
//! trendcast predict --input savings.csv --model polynomial --degree 3 --with-history
//!
//! # List sample datasets and models
//! trendcast datasets
//! trendcast models
//!
//! # Show the effective configuration
//! trendcast config show
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod datasets;
mod error;
mod input;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stderr keeps stdout clean for json/csv output
    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trendcast=debug,warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trendcast=info,warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = cli.format;
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Predict(args) => commands::predict::execute(args, config_path, format)?,
        Commands::Datasets => commands::datasets::execute(format)?,
        Commands::Models => commands::models::execute(format)?,
        Commands::Config(args) => commands::config::execute(args, config_path, format)?,
    }

    Ok(())
}
