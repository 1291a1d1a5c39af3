//! CLI command implementations.

pub mod click;
pub mod config;
pub mod render;
pub mod watch;

use anyhow::{Context, Result};
use segbar_core::AggregatedState;
use segbar_store::BarConfig;
use std::path::Path;

use crate::Cli;

/// Loads the configuration named on the command line, or the default one.
pub fn load_config(cli: &Cli) -> Result<BarConfig> {
    let config = match &cli.config {
        Some(path) => BarConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => BarConfig::load().context("Failed to load config")?,
    };
    Ok(config)
}

/// Reads an aggregated state saved as `{"<provider>": <output>, ...}`.
pub fn load_state(path: &Path) -> Result<AggregatedState> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read state file {}", path.display()))?;
    let state = serde_json::from_str(&content)
        .with_context(|| format!("Invalid state file {}", path.display()))?;
    Ok(state)
}
