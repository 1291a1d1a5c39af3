// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! segbar CLI - drive the status bar core from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Render one bar frame from a saved state
//! segbar render state.json
//!
//! # Feed provider snapshots as JSON lines
//! provider-feed | segbar watch
//!
//! # Replay a recorded feed and exit
//! segbar watch --once < feed.jsonl
//!
//! # What does clicking workspace 3 send?
//! segbar click workspace --id 3 --state state.json
//!
//! # JSON output
//! segbar --format json --pretty render state.json
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{click, config, render, watch};

// ============================================================================
// CLI Definition
// ============================================================================

/// segbar CLI - desktop status bar core.
#[derive(Parser)]
#[command(name = "segbar")]
#[command(about = "Desktop status bar core")]
#[command(long_about = r#"
segbar merges provider snapshots (date, window manager, media, tray,
audio, network, disk, CPU, memory) into one state and derives the bar's
segments from it.

Snapshots are JSON objects of the form:
  {"provider": "cpu", "output": {"usage": 42.5}}

Examples:
  segbar render state.json             # One frame
  segbar watch < feed.jsonl            # Live feed from stdin
  segbar click lock --state s.json     # Resolve a click
  segbar config init                   # Write default config
"#)]
#[command(version)]
#[command(author = "segbar Contributors")]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (defaults to the user config dir).
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Render one frame from a state file.
    #[command(visible_alias = "r")]
    Render(render::RenderArgs),

    /// Aggregate snapshots from stdin and render on every change.
    #[command(visible_alias = "w")]
    Watch(watch::WatchArgs),

    /// Resolve a pointer event on a bar segment.
    Click(click::ClickArgs),

    /// Manage configuration.
    Config(config::ConfigArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
    /// Invalid configuration.
    ConfigError = 2,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let filter = if verbose {
        EnvFilter::new("segbar=debug,info")
    } else {
        EnvFilter::new("segbar=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Render(args) => render::run(args, &cli),
        Commands::Watch(args) => watch::run(args, &cli).await,
        Commands::Click(args) => click::run(args, &cli),
        Commands::Config(args) => config::run(args, &cli),
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e:#}");
        }
        let code = if e.downcast_ref::<segbar_store::StoreError>().is_some() {
            ExitCode::ConfigError
        } else {
            ExitCode::Error
        };
        std::process::exit(code as i32);
    }

    Ok(())
}
