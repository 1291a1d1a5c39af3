//! Workspace reconciliation.
//!
//! Merges the window manager's three workspace views (all, current per
//! monitor, displayed) into one ordered, annotated strip.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;

use crate::commands::ProviderCommand;
use crate::models::Workspace;
use crate::traits::ClickTarget;

/// Summary text when no workspace is displayed.
pub const UNKNOWN_WORKSPACE: &str = "Unknown";

/// Rendering hint for one workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkspaceState {
    /// Current on some monitor and shown on this bar's monitor.
    FocusedCurrent,
    /// Current on some monitor, not the displayed one.
    UnfocusedCurrent,
    /// Not current on any monitor.
    NotCurrent,
}

impl WorkspaceState {
    /// Glyph shown for this state.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::FocusedCurrent => "◎",
            Self::UnfocusedCurrent => "●",
            Self::NotCurrent => "◌",
        }
    }

    /// Style class for this state.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::FocusedCurrent => "focused",
            Self::UnfocusedCurrent | Self::NotCurrent => "unfocused",
        }
    }
}

/// One annotated workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceEntry {
    /// Render key: the id, or the name when there is no id.
    pub key: String,
    /// Raw workspace name.
    pub name: String,
    /// Display name.
    pub display_name: String,
    /// Whether the workspace is current on some monitor.
    pub is_current: bool,
    /// Whether the workspace is the displayed one.
    pub is_focused: bool,
    /// Rendering hint.
    pub state: WorkspaceState,
}

impl WorkspaceEntry {
    /// Label text: `"<name>: <marker>"` for current workspaces, the marker otherwise.
    pub fn label(&self) -> String {
        if self.is_current {
            format!("{}: {}", self.name, self.state.marker())
        } else {
            self.state.marker().to_string()
        }
    }
}

impl ClickTarget for WorkspaceEntry {
    fn target_id(&self) -> &str {
        &self.name
    }

    fn on_left_click(&self) -> Option<ProviderCommand> {
        Some(ProviderCommand::focus_workspace(&self.name))
    }
}

/// The reconciled workspace strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceStrip {
    /// Workspaces in display order.
    pub entries: Vec<WorkspaceEntry>,
    /// Display name of the displayed workspace, or [`UNKNOWN_WORKSPACE`].
    pub summary: String,
}

/// Numeric ordering key. Non-numeric names have none.
fn numeric_key(name: &str) -> Option<f64> {
    name.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Ascending by numeric name, non-numeric names last in input order.
fn compare_names(a: &Workspace, b: &Workspace) -> Ordering {
    match (numeric_key(&a.name), numeric_key(&b.name)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Reconciles the three workspace views into one strip.
///
/// Pure: identical inputs always produce identical output.
pub fn reconcile(
    all: &[Workspace],
    current: &[Workspace],
    displayed: Option<&Workspace>,
) -> WorkspaceStrip {
    let current_set: HashSet<&str> = current.iter().map(|ws| ws.name.as_str()).collect();

    let mut sorted: Vec<&Workspace> = all.iter().collect();
    sorted.sort_by(|a, b| compare_names(a, b));

    let entries = sorted
        .into_iter()
        .map(|ws| {
            let is_current = current_set.contains(ws.name.as_str());
            let is_focused = displayed.is_some_and(|d| d.display_name == ws.display_name);
            let state = match (is_current, is_focused) {
                (true, true) => WorkspaceState::FocusedCurrent,
                (true, false) => WorkspaceState::UnfocusedCurrent,
                (false, _) => WorkspaceState::NotCurrent,
            };
            WorkspaceEntry {
                key: ws.key().to_string(),
                name: ws.name.clone(),
                display_name: ws.display_name.clone(),
                is_current,
                is_focused,
                state,
            }
        })
        .collect();

    let summary = displayed
        .map_or(UNKNOWN_WORKSPACE, |d| d.display_name.as_str())
        .to_string();

    WorkspaceStrip { entries, summary }
}

// ============================================================================
// Tests
// ============================================================================
