//! Watch command - live aggregation of a JSON-lines snapshot feed.

use anyhow::Result;
use clap::Args;
use segbar_core::{BarView, ProviderKind, ProviderSnapshot, ViewOptions};
use segbar_store::{Aggregator, ProviderFeed, Revision, StateSubscription, StoreError};
use std::collections::HashMap;
use std::io::{stdout, IsTerminal, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::load_config;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for watch command.
#[derive(Args)]
pub struct WatchArgs {
    /// Exit once stdin is exhausted and every snapshot has been applied.
    #[arg(long)]
    pub once: bool,
}

/// Runs the watch command.
pub async fn run(args: &WatchArgs, cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let options = config.view_options();

    let mut aggregator = Aggregator::new(config);
    let feeds = feeds_by_kind(aggregator.register_enabled().await?);
    let mut subscription = aggregator.subscribe();
    aggregator.init()?;

    info!(providers = feeds.len(), once = args.once, "Starting watch mode");

    let stdin = BufReader::new(tokio::io::stdin());
    let reader = tokio::spawn(feed_lines(stdin, feeds));
    let renderer = Renderer::new(cli.format, !cli.no_color, options, stdout().is_terminal());

    let mut out = stdout();
    let result = watch_loop(&mut subscription, reader, &renderer, args.once, &mut out).await;

    let released = aggregator.teardown().await;
    debug!(released, "Watch stopped");
    result.map(|_| ())
}

fn feeds_by_kind(feeds: Vec<ProviderFeed>) -> HashMap<ProviderKind, ProviderFeed> {
    feeds.into_iter().map(|feed| (feed.kind(), feed)).collect()
}

/// Renders every observed publish until input ends (`once`) or Ctrl+C.
///
/// Returns the last rendered version.
async fn watch_loop<W: Write>(
    subscription: &mut StateSubscription,
    mut reader: JoinHandle<Result<u64, StoreError>>,
    renderer: &Renderer,
    once: bool,
    out: &mut W,
) -> Result<u64> {
    let mut input_open = true;
    let mut rendered = 0;
    let mut stop_at = None;

    loop {
        tokio::select! {
            changed = subscription.changed() => {
                let revision = changed?;
                renderer.render(&revision, out)?;
                rendered = revision.version;
                if stop_at.is_some_and(|n| rendered >= n) {
                    break;
                }
            }
            result = &mut reader, if input_open => {
                input_open = false;
                let count = result??;
                debug!(count, "Input exhausted");
                if once {
                    if rendered >= count {
                        break;
                    }
                    stop_at = Some(count);
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    Ok(rendered)
}

/// Reads JSON-line snapshots and emits them on their provider's feed.
///
/// Malformed lines and disabled providers are skipped. Returns the number
/// of snapshots emitted.
async fn feed_lines<R>(
    input: R,
    feeds: HashMap<ProviderKind, ProviderFeed>,
) -> Result<u64, StoreError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut emitted = 0;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let snapshot = match ProviderSnapshot::from_json(line) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "Skipping malformed snapshot");
                continue;
            }
        };

        let Some(feed) = feeds.get(&snapshot.kind()) else {
            debug!(provider = ?snapshot.kind(), "Provider disabled, snapshot dropped");
            continue;
        };
        feed.emit(snapshot).await?;
        emitted += 1;
    }

    Ok(emitted)
}

/// Draws one frame per observed publish.
struct Renderer {
    format: OutputFormat,
    text: TextFormatter,
    json: JsonFormatter,
    options: ViewOptions,
    clear_screen: bool,
}

impl Renderer {
    fn new(
        format: OutputFormat,
        use_colors: bool,
        options: ViewOptions,
        clear_screen: bool,
    ) -> Self {
        Self {
            format,
            text: TextFormatter::new(use_colors),
            // One frame per line.
            json: JsonFormatter::new(false),
            options,
            clear_screen,
        }
    }

    fn render<W: Write>(&self, revision: &Revision, out: &mut W) -> Result<()> {
        let view = BarView::build(&revision.state, &self.options);

        match self.format {
            OutputFormat::Json => {
                writeln!(out, "{}", self.json.format(&view)?)?;
            }
            OutputFormat::Text => {
                if self.clear_screen {
                    write!(out, "\x1b[2J\x1b[H")?;
                }
                let now = chrono::Local::now();
                writeln!(
                    out,
                    "segbar watch - {} (version {})",
                    now.format("%H:%M:%S"),
                    revision.version
                )?;
                writeln!(out, "{}", "─".repeat(50))?;
                writeln!(out, "{}", self.text.format_bar(&view))?;
                writeln!(out)?;
            }
        }

        out.flush()?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
