//! Left panel: window-manager lock, date, workspaces, shortcuts.

use serde::{Deserialize, Serialize};

use crate::commands::{ProviderCommand, WM_TOGGLE_PAUSE};
use crate::models::AggregatedState;
use crate::traits::ClickTarget;
use crate::view::ViewOptions;
use crate::workspaces::{reconcile, WorkspaceStrip};

/// The window-manager pause toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PauseLock {
    /// Whether the window manager is paused.
    pub paused: bool,
}

impl PauseLock {
    /// Style class: `paused` or `active`.
    pub fn css_class(&self) -> &'static str {
        if self.paused { "paused" } else { "active" }
    }
}

impl ClickTarget for PauseLock {
    fn target_id(&self) -> &str {
        "lock"
    }

    fn on_left_click(&self) -> Option<ProviderCommand> {
        Some(ProviderCommand::wm(WM_TOGGLE_PAUSE))
    }
}

/// A launcher button that runs a window-manager command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    /// Stable identifier.
    pub id: String,
    /// Tooltip text.
    pub title: String,
    /// Icon asset path.
    pub icon: String,
    /// Window-manager command, e.g. `shell-exec taskmgr`.
    pub command: String,
}

impl ClickTarget for Shortcut {
    fn target_id(&self) -> &str {
        &self.id
    }

    fn on_left_click(&self) -> Option<ProviderCommand> {
        Some(ProviderCommand::wm(self.command.clone()))
    }
}

/// Left panel contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeftPanel {
    /// Pause toggle, when the window manager has reported.
    pub lock: Option<PauseLock>,
    /// Formatted date, when the date provider has reported one.
    pub date: Option<String>,
    /// Reconciled workspaces, when the window manager has reported.
    pub workspaces: Option<WorkspaceStrip>,
    /// Configured shortcuts.
    pub shortcuts: Vec<Shortcut>,
}

impl LeftPanel {
    /// Derives the left panel.
    pub fn build(state: &AggregatedState, options: &ViewOptions) -> Self {
        let wm = state.glazewm();
        Self {
            lock: wm.map(|wm| PauseLock {
                paused: wm.is_paused,
            }),
            date: state.date().and_then(|d| d.formatted.clone()),
            workspaces: wm.map(|wm| {
                reconcile(
                    &wm.all_workspaces,
                    &wm.current_workspaces,
                    wm.displayed_workspace.as_ref(),
                )
            }),
            shortcuts: options.shortcuts.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DateOutput, GlazeWmOutput, ProviderSnapshot, Workspace};

    #[test]
    fn test_left_panel_from_glazewm() {
        let state = AggregatedState::new()
            .with_snapshot(ProviderSnapshot::GlazeWm(GlazeWmOutput {
                all_workspaces: vec![Workspace::new("2"), Workspace::new("1")],
                current_workspaces: vec![Workspace::new("1")],
                displayed_workspace: Some(Workspace::new("1")),
                is_paused: true,
                ..Default::default()
            }))
            .with_snapshot(ProviderSnapshot::Date(DateOutput {
                formatted: Some("14.10 — 09:30".to_string()),
            }));

        let panel = LeftPanel::build(&state, &ViewOptions::default());

        let lock = panel.lock.unwrap();
        assert_eq!(lock.css_class(), "paused");
        assert_eq!(lock.on_left_click(), Some(ProviderCommand::wm("wm-toggle-pause")));
        assert_eq!(panel.date.as_deref(), Some("14.10 — 09:30"));

        let strip = panel.workspaces.unwrap();
        assert_eq!(strip.entries[0].name, "1");
        assert_eq!(strip.summary, "1");
    }

    #[test]
    fn test_shortcut_runs_its_command() {
        let shortcut = Shortcut {
            id: "taskmgr".to_string(),
            title: "Task Manager".to_string(),
            icon: "./icons/taskmgr-00.png".to_string(),
            command: "shell-exec taskmgr".to_string(),
        };
        assert_eq!(
            shortcut.on_left_click(),
            Some(ProviderCommand::wm("shell-exec taskmgr"))
        );
    }

    #[test]
    fn test_date_without_formatted_text() {
        let state =
            AggregatedState::new().with_snapshot(ProviderSnapshot::Date(DateOutput::default()));
        let panel = LeftPanel::build(&state, &ViewOptions::default());
        assert!(panel.date.is_none());
        assert!(panel.lock.is_none());
    }
}
