//! Imperative provider commands.

use serde::{Deserialize, Serialize};

use crate::models::ProviderKind;

/// Window-manager command that toggles the paused state.
pub const WM_TOGGLE_PAUSE: &str = "wm-toggle-pause";

/// A command addressed to one provider.
///
/// Commands are fire-and-forget: the only feedback is the provider's next
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ProviderCommand {
    /// Run an arbitrary window-manager command, e.g. `focus --workspace 2`.
    RunWmCommand {
        /// Command line understood by the window manager.
        command: String,
    },
    /// Toggle play/pause on the current media session.
    TogglePlayPause,
    /// Skip to the next track.
    NextTrack,
    /// Go back to the previous track.
    PreviousTrack,
    /// Primary click on a tray icon.
    TrayLeftClick {
        /// Tray icon id.
        icon_id: String,
    },
    /// Middle click on a tray icon.
    TrayMiddleClick {
        /// Tray icon id.
        icon_id: String,
    },
    /// Secondary click on a tray icon.
    TrayRightClick {
        /// Tray icon id.
        icon_id: String,
    },
}

impl ProviderCommand {
    /// Builds a window-manager command.
    pub fn wm(command: impl Into<String>) -> Self {
        Self::RunWmCommand {
            command: command.into(),
        }
    }

    /// Builds the command that focuses a workspace by its raw name.
    pub fn focus_workspace(name: &str) -> Self {
        Self::wm(format!("focus --workspace {name}"))
    }

    /// Returns the provider that executes this command.
    pub fn target(&self) -> ProviderKind {
        match self {
            Self::RunWmCommand { .. } => ProviderKind::GlazeWm,
            Self::TogglePlayPause | Self::NextTrack | Self::PreviousTrack => ProviderKind::Media,
            Self::TrayLeftClick { .. }
            | Self::TrayMiddleClick { .. }
            | Self::TrayRightClick { .. } => ProviderKind::Systray,
        }
    }
}

impl std::fmt::Display for ProviderCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RunWmCommand { command } => write!(f, "glazewm.runCommand({command:?})"),
            Self::TogglePlayPause => f.write_str("media.togglePlayPause()"),
            Self::NextTrack => f.write_str("media.next()"),
            Self::PreviousTrack => f.write_str("media.previous()"),
            Self::TrayLeftClick { icon_id } => write!(f, "systray.onLeftClick({icon_id:?})"),
            Self::TrayMiddleClick { icon_id } => write!(f, "systray.onMiddleClick({icon_id:?})"),
            Self::TrayRightClick { icon_id } => write!(f, "systray.onRightClick({icon_id:?})"),
        }
    }
}
