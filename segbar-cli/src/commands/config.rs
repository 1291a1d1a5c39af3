//! Config command - manage configuration.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use segbar_store::BarConfig;
use std::path::PathBuf;
use tracing::info;

use super::load_config;
use crate::output::JsonFormatter;
use crate::{Cli, OutputFormat};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration.
    Show,

    /// Show the configuration path.
    Path,

    /// Write the default configuration.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

/// Runs the config command.
pub fn run(args: &ConfigArgs, cli: &Cli) -> Result<()> {
    match &args.action {
        ConfigAction::Show => show_config(cli),
        ConfigAction::Path => show_path(cli),
        ConfigAction::Init { force } => init_config(*force, cli),
    }
}

fn config_path(cli: &Cli) -> PathBuf {
    cli.config.clone().unwrap_or_else(BarConfig::default_path)
}

fn show_config(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    match cli.format {
        OutputFormat::Text => {
            println!("segbar Configuration");
            println!("{}", "─".repeat(40));
            println!();
            println!("Providers:");
            for (kind, provider) in &config.providers {
                let status = if provider.enabled { "enabled" } else { "disabled" };
                let refresh = provider
                    .refresh_interval_ms
                    .map_or_else(|| "event-driven".to_string(), |ms| format!("every {ms}ms"));
                println!("  • {:<10} {:<9} {}", kind.display_name(), status, refresh);
            }
            println!();
            println!("Audio thresholds: {:?}", config.thresholds.audio.values());
            println!("Wi-Fi thresholds: {:?}", config.thresholds.wifi.values());
            println!("Invert audio load: {}", config.invert_audio_load);
            println!("Icons dir: {}", config.icons_dir);
            println!("Hidden tray icons: {}", config.tray.excluded_icon_hashes.len());
            println!("Shortcuts: {}", config.shortcuts.len());
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&config)?);
        }
    }

    Ok(())
}

fn show_path(cli: &Cli) -> Result<()> {
    let path = config_path(cli);

    match cli.format {
        OutputFormat::Text => {
            println!("Config file: {}", path.display());
            if !path.exists() {
                println!("(not created yet, defaults in use)");
            }
        }
        OutputFormat::Json => {
            let paths = serde_json::json!({
                "config_file": path.display().to_string(),
                "exists": path.exists(),
            });
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&paths)?);
        }
    }

    Ok(())
}

fn init_config(force: bool, cli: &Cli) -> Result<()> {
    let path = config_path(cli);

    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    BarConfig::default().save_to(&path)?;
    info!(path = %path.display(), "Default configuration written");
    if !cli.quiet {
        println!("Wrote {}", path.display());
    }

    Ok(())
}
