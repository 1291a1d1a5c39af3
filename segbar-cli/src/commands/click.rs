//! Click command - resolve a pointer event on one bar segment.

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use segbar_core::view::CenterPanel;
use segbar_core::{
    AggregatedState, BarView, ClickTarget, DispatchOutcome, Dispatcher, EventKind, Flyout,
    PointerButton, PointerEvent,
};
use segbar_store::command_channel;
use std::path::PathBuf;

use super::{load_config, load_state};
use crate::output::{ClickOutput, JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Clickable bar segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClickSegment {
    /// Window-manager pause toggle.
    Lock,
    /// A workspace button (`--id` is the workspace name).
    Workspace,
    /// A configured shortcut (`--id` is the shortcut id).
    Shortcut,
    /// The media segment.
    Media,
    /// A tray icon (`--id` is the icon id).
    Tray,
    /// The audio segment's flyout.
    Audio,
}

/// Arguments for the click command.
#[derive(Args)]
pub struct ClickArgs {
    /// Segment that receives the event.
    pub segment: ClickSegment,

    /// Item within the segment.
    #[arg(long)]
    pub id: Option<String>,

    /// Pointer button: primary, middle or secondary.
    #[arg(long, short, default_value = "primary")]
    pub button: PointerButton,

    /// Hold shift.
    #[arg(long)]
    pub shift: bool,

    /// Deliver the host's context-menu event instead of a press.
    #[arg(long)]
    pub context_menu: bool,

    /// State file the bar is built from.
    #[arg(long, short)]
    pub state: Option<PathBuf>,
}

/// Runs the click command.
pub fn run(args: &ClickArgs, cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let state = match &args.state {
        Some(path) => load_state(path)?,
        None => AggregatedState::new(),
    };
    let view = BarView::build(&state, &config.view_options());

    let event = if args.context_menu {
        PointerEvent::context_menu()
    } else {
        PointerEvent::press(args.button)
    }
    .with_shift(args.shift);

    let output = if args.segment == ClickSegment::Audio {
        toggle_audio_flyout(&view, &event)?
    } else {
        dispatch(&view, args, &event)?
    };

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_click(&output));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&output)?);
        }
    }

    Ok(())
}

fn dispatch(view: &BarView, args: &ClickArgs, event: &PointerEvent) -> Result<ClickOutput> {
    let target = find_target(view, args.segment, args.id.as_deref())?;
    let dispatcher = Dispatcher::for_item(target, target.on_right_click().is_some());

    let (sink, mut commands) = command_channel();
    let outcome = dispatcher.dispatch(event, &sink);
    let command = commands.try_recv().ok();

    Ok(ClickOutput {
        segment: segment_name(args.segment).to_string(),
        target_id: target.target_id().to_string(),
        outcome: outcome_name(&outcome).to_string(),
        provider: command.as_ref().map(|c| c.target().cli_name().to_string()),
        command,
        context_menu_prevented: dispatcher.prevents_context_menu(event),
        flyout_open: None,
    })
}

/// The audio flyout is local state: a primary press flips it, nothing is sent.
fn toggle_audio_flyout(view: &BarView, event: &PointerEvent) -> Result<ClickOutput> {
    if view.right.audio.is_none() {
        bail!("audio segment is not shown");
    }

    let mut flyout = Flyout::new();
    let outcome = if event.shift {
        "suppressed"
    } else if event.kind == EventKind::Press && event.button == PointerButton::Primary {
        flyout.toggle();
        "toggled"
    } else {
        "ignored"
    };

    Ok(ClickOutput {
        segment: segment_name(ClickSegment::Audio).to_string(),
        target_id: "audio".to_string(),
        outcome: outcome.to_string(),
        provider: None,
        command: None,
        context_menu_prevented: false,
        flyout_open: Some(flyout.is_open()),
    })
}

fn find_target<'v>(
    view: &'v BarView,
    segment: ClickSegment,
    id: Option<&str>,
) -> Result<&'v dyn ClickTarget> {
    let not_shown = || format!("{} segment is not shown", segment_name(segment));

    let target: &dyn ClickTarget = match segment {
        ClickSegment::Lock => view.left.lock.as_ref().with_context(not_shown)?,
        ClickSegment::Media => match &view.center {
            CenterPanel::Media(media) => media,
            _ => bail!(not_shown()),
        },
        ClickSegment::Workspace => {
            let id = id.context("--id <NAME> is required for workspaces")?;
            view.left
                .workspaces
                .as_ref()
                .with_context(not_shown)?
                .entries
                .iter()
                .find(|entry| entry.name == id)
                .with_context(|| format!("Unknown workspace: {id}"))?
        }
        ClickSegment::Shortcut => {
            let id = id.context("--id <ID> is required for shortcuts")?;
            view.left
                .shortcuts
                .iter()
                .find(|shortcut| shortcut.id == id)
                .with_context(|| format!("Unknown shortcut: {id}"))?
        }
        ClickSegment::Tray => {
            let id = id.context("--id <ICON_ID> is required for tray icons")?;
            view.right
                .tray
                .as_ref()
                .with_context(not_shown)?
                .icons
                .iter()
                .find(|icon| icon.id == id)
                .with_context(|| format!("Unknown or hidden tray icon: {id}"))?
        }
        ClickSegment::Audio => bail!("Audio has no provider command"),
    };
    Ok(target)
}

fn segment_name(segment: ClickSegment) -> &'static str {
    match segment {
        ClickSegment::Lock => "lock",
        ClickSegment::Workspace => "workspace",
        ClickSegment::Shortcut => "shortcut",
        ClickSegment::Media => "media",
        ClickSegment::Tray => "tray",
        ClickSegment::Audio => "audio",
    }
}

fn outcome_name(outcome: &DispatchOutcome) -> &'static str {
    match outcome {
        DispatchOutcome::Sent(_) => "sent",
        DispatchOutcome::Suppressed => "suppressed",
        DispatchOutcome::Ignored => "ignored",
    }
}
