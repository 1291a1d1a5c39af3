//! Segment view-models.
//!
//! Everything the presentation layer needs to draw one frame of the bar,
//! derived from a single [`AggregatedState`]. A segment whose provider has
//! not reported is `None` and is not drawn; a present provider with
//! missing fields yields fallback text.

mod center;
mod left;
mod right;

pub use center::{CenterPanel, MediaView, WindowView};
pub use left::{LeftPanel, PauseLock, Shortcut};
pub use right::{
    AudioView, CpuView, DiskSegment, DiskView, MemoryView, NetworkView, RightPanel, TrayView,
};

use serde::Serialize;
use std::collections::HashSet;

use crate::derivation::Thresholds;
use crate::models::AggregatedState;

/// Rendering options that are not provider data.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewOptions {
    /// Volume icon thresholds.
    pub audio_thresholds: Thresholds,
    /// Wireless signal icon thresholds.
    pub wifi_thresholds: Thresholds,
    /// Classify volume as headroom.
    pub invert_audio_load: bool,
    /// Directory holding icon assets.
    pub icons_dir: String,
    /// Icon file extension.
    pub icon_ext: String,
    /// Tray icon hashes that are never shown.
    pub tray_exclusions: HashSet<String>,
    /// Launcher shortcuts.
    pub shortcuts: Vec<Shortcut>,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            audio_thresholds: Thresholds::AUDIO,
            wifi_thresholds: Thresholds::WIFI,
            invert_audio_load: true,
            icons_dir: "./icons".to_string(),
            icon_ext: "png".to_string(),
            tray_exclusions: HashSet::new(),
            shortcuts: Vec::new(),
        }
    }
}

impl ViewOptions {
    pub(crate) fn icon(&self, name: &str, tier: crate::derivation::IconTier) -> String {
        crate::derivation::icon_path(&self.icons_dir, name, tier, &self.icon_ext)
    }
}

/// One frame of the bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarView {
    /// Lock, date, workspaces, shortcuts.
    pub left: LeftPanel,
    /// Focused window or media session.
    pub center: CenterPanel,
    /// Tray and system metrics.
    pub right: RightPanel,
}

impl BarView {
    /// Derives the whole bar from one state.
    pub fn build(state: &AggregatedState, options: &ViewOptions) -> Self {
        Self {
            left: LeftPanel::build(state, options),
            center: CenterPanel::build(state, options),
            right: RightPanel::build(state, options),
        }
    }
}

/// Open/closed state of a flyout or hover panel.
///
/// Local to one widget instance; never derived from provider data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flyout {
    open: bool,
}

impl Flyout {
    /// A closed flyout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the state and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Closes the flyout.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Style class for the panel.
    pub fn css_class(&self) -> &'static str {
        if self.open { "open" } else { "" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flyouts_are_independent() {
        let mut audio = Flyout::new();
        let tray = Flyout::new();

        assert!(audio.toggle());
        assert!(audio.is_open());
        assert!(!tray.is_open());
        assert_eq!(audio.css_class(), "open");

        assert!(!audio.toggle());
        audio.toggle();
        audio.close();
        assert!(!audio.is_open());
    }

    #[test]
    fn test_empty_state_renders_nothing() {
        let view = BarView::build(&AggregatedState::new(), &ViewOptions::default());
        assert!(view.left.lock.is_none());
        assert!(view.left.date.is_none());
        assert!(view.left.workspaces.is_none());
        assert_eq!(view.center, CenterPanel::Empty);
        assert!(view.right.audio.is_none());
        assert!(view.right.network.is_none());
        assert!(view.right.disks.is_none());
        assert!(view.right.cpu.is_none());
        assert!(view.right.memory.is_none());
        assert!(view.right.tray.is_none());
    }
}
