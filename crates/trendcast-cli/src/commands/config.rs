//! Config command implementation.
//!
//! Shows the effective prediction configuration.

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::commands::{load_config, resolve_config_source, ConfigSource};
use crate::output::{print_header, print_output, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file location
    Path,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(config_path, format),
        ConfigCommand::Path => {
            match resolve_config_source(config_path) {
                ConfigSource::File(path) => println!("{}", path.display()),
                ConfigSource::Defaults => println!("(defaults; no configuration file found)"),
            }
            Ok(())
        }
    }
}

fn show(config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let config = load_config(config_path)?;

    match format {
        OutputFormat::Table => {
            print_header("Configuration");
            print!("{}", config.to_toml_string()?);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        OutputFormat::Csv => {
            let rows = vec![
                KeyValue::new("model", config.model.as_str()),
                KeyValue::new("degree", config.degree.to_string()),
                KeyValue::new("future_points", config.future_points.to_string()),
            ];
            print_output(&rows, format)?;
        }
    }

    Ok(())
}
