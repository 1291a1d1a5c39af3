//! Render command - one frame from a saved state.

use anyhow::Result;
use clap::Args;
use segbar_core::BarView;
use std::path::PathBuf;
use tracing::debug;

use super::{load_config, load_state};
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// State file: a JSON object keyed by provider name.
    pub state_file: PathBuf,
}

/// Runs the render command.
pub fn run(args: &RenderArgs, cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let state = load_state(&args.state_file)?;
    debug!(providers = state.len(), "Loaded state");

    let view = BarView::build(&state, &config.view_options());

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_bar(&view));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&view)?);
        }
    }

    Ok(())
}
