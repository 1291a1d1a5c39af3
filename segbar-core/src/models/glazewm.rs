//! Window-manager (GlazeWM) provider output.

use serde::{Deserialize, Serialize};

/// A workspace as reported by the window manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Workspace {
    /// Stable identifier, when the provider has one.
    pub id: Option<String>,
    /// Workspace name. Usually numeric and used as the ordering key.
    #[serde(deserialize_with = "crate::models::serde_util::null_as_default")]
    pub name: String,
    /// Human-facing name.
    #[serde(deserialize_with = "crate::models::serde_util::null_as_default")]
    pub display_name: String,
}

impl Workspace {
    /// Creates a workspace whose display name equals its name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: None,
            display_name: name.clone(),
            name,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Returns the id, falling back to the name.
    pub fn key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }
}

/// A monitor as reported by the window manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Monitor {
    /// Monitor identifier.
    #[serde(deserialize_with = "crate::models::serde_util::null_as_default")]
    pub id: String,
    /// OS device name.
    pub device_name: Option<String>,
}

/// The focused window container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FocusedContainer {
    /// Executable name, e.g. `firefox.exe`.
    pub process_name: Option<String>,
    /// Window title.
    pub title: Option<String>,
}

/// GlazeWM provider output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GlazeWmOutput {
    /// Every workspace on every monitor.
    #[serde(deserialize_with = "crate::models::serde_util::null_as_default")]
    pub all_workspaces: Vec<Workspace>,
    /// The active workspace of each monitor.
    #[serde(deserialize_with = "crate::models::serde_util::null_as_default")]
    pub current_workspaces: Vec<Workspace>,
    /// The workspace shown on the bar's monitor.
    pub displayed_workspace: Option<Workspace>,
    /// The focused window, if any.
    pub focused_container: Option<FocusedContainer>,
    /// Whether the window manager is paused.
    #[serde(deserialize_with = "crate::models::serde_util::null_as_default")]
    pub is_paused: bool,
    /// The monitor that currently has focus.
    pub focused_monitor: Option<Monitor>,
    /// The monitor this bar is mounted on.
    pub current_monitor: Option<Monitor>,
}

impl GlazeWmOutput {
    /// Returns true when the bar's monitor is the focused one.
    ///
    /// Two absent monitors compare equal.
    pub fn bar_monitor_focused(&self) -> bool {
        self.focused_monitor == self.current_monitor
    }
}
