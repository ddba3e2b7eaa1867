//! CLI command implementations.

pub mod config;
pub mod datasets;
pub mod models;
pub mod predict;

pub use config::ConfigArgs;
pub use predict::PredictArgs;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use trendcast_core::config::PredictionConfig;

/// Configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "trendcast.toml";

/// Where the effective configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Loaded from this file.
    File(PathBuf),
    /// Built-in defaults.
    Defaults,
}

/// Finds the configuration file: the explicit path, else `./trendcast.toml` if present.
pub fn resolve_config_source(explicit: Option<&Path>) -> ConfigSource {
    match explicit {
        Some(path) => ConfigSource::File(path.to_path_buf()),
        None => {
            let local = PathBuf::from(DEFAULT_CONFIG_FILE);
            if local.exists() {
                ConfigSource::File(local)
            } else {
                ConfigSource::Defaults
            }
        }
    }
}

/// Loads the effective configuration.
pub fn load_config(explicit: Option<&Path>) -> Result<PredictionConfig> {
    match resolve_config_source(explicit) {
        ConfigSource::File(path) => {
            tracing::info!(path = %path.display(), "loading configuration");
            PredictionConfig::from_file(&path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))
        }
        ConfigSource::Defaults => Ok(PredictionConfig::default()),
    }
}
