//! Center panel: focused window title, or the media session when the bar's
//! monitor is not focused.

use serde::Serialize;

use crate::commands::ProviderCommand;
use crate::derivation::{clean_process_name, IconTier};
use crate::models::{AggregatedState, GlazeWmOutput, MediaOutput};
use crate::traits::ClickTarget;
use crate::view::ViewOptions;

/// The focused window label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowView {
    /// Cleaned process name.
    pub label: String,
}

impl WindowView {
    fn build(wm: &GlazeWmOutput) -> Self {
        let process = wm
            .focused_container
            .as_ref()
            .and_then(|c| c.process_name.as_deref());
        Self {
            label: clean_process_name(process),
        }
    }
}

/// The media session segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaView {
    /// Track title or fallback.
    pub title: String,
    /// Artist or fallback.
    pub artist: String,
    /// Whether playback is running.
    pub is_playing: bool,
    /// Play/pause icon path.
    pub icon: String,
}

impl MediaView {
    fn build(media: &MediaOutput, options: &ViewOptions) -> Self {
        let session = media.current_session.clone().unwrap_or_default();
        // play-00 is the "playing" glyph, play-01 the "paused" one.
        let tier = if session.is_playing {
            IconTier::Zero
        } else {
            IconTier::One
        };
        Self {
            title: session.title_or_default().to_string(),
            artist: session.artist_or_default().to_string(),
            is_playing: session.is_playing,
            icon: options.icon("play", tier),
        }
    }

    /// `"<title> — <artist>"`.
    pub fn text(&self) -> String {
        format!("{} — {}", self.title, self.artist)
    }
}

impl ClickTarget for MediaView {
    fn target_id(&self) -> &str {
        "media"
    }

    fn on_left_click(&self) -> Option<ProviderCommand> {
        Some(ProviderCommand::TogglePlayPause)
    }

    fn on_middle_click(&self) -> Option<ProviderCommand> {
        Some(ProviderCommand::PreviousTrack)
    }

    fn on_right_click(&self) -> Option<ProviderCommand> {
        Some(ProviderCommand::NextTrack)
    }
}

/// Center panel contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "segment", rename_all = "snake_case")]
pub enum CenterPanel {
    /// The focused window.
    Window(WindowView),
    /// The media session.
    Media(MediaView),
    /// Nothing to show.
    Empty,
}

impl CenterPanel {
    /// Derives the center panel.
    ///
    /// Without window-manager data the monitors count as equal, and the
    /// window segment is omitted.
    pub fn build(state: &AggregatedState, options: &ViewOptions) -> Self {
        let wm = state.glazewm();
        let bar_focused = wm.is_none_or(GlazeWmOutput::bar_monitor_focused);

        if bar_focused {
            return wm.map_or(Self::Empty, |wm| Self::Window(WindowView::build(wm)));
        }

        state
            .media()
            .map_or(Self::Empty, |media| Self::Media(MediaView::build(media, options)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FocusedContainer, MediaSession, Monitor, ProviderSnapshot};

    fn monitor(id: &str) -> Option<Monitor> {
        Some(Monitor {
            id: id.to_string(),
            device_name: None,
        })
    }

    fn wm(focused: &str, current: &str, process: Option<&str>) -> ProviderSnapshot {
        ProviderSnapshot::GlazeWm(GlazeWmOutput {
            focused_monitor: monitor(focused),
            current_monitor: monitor(current),
            focused_container: Some(FocusedContainer {
                process_name: process.map(str::to_string),
                title: None,
            }),
            ..Default::default()
        })
    }

    #[test]
    fn test_window_shown_on_focused_monitor() {
        let state = AggregatedState::new().with_snapshot(wm("A", "A", Some("firefox.exe")));
        let panel = CenterPanel::build(&state, &ViewOptions::default());
        assert_eq!(
            panel,
            CenterPanel::Window(WindowView {
                label: "Firefox".to_string()
            })
        );
    }

    #[test]
    fn test_window_without_process_name() {
        let state = AggregatedState::new().with_snapshot(wm("A", "A", None));
        match CenterPanel::build(&state, &ViewOptions::default()) {
            CenterPanel::Window(window) => assert_eq!(window.label, "Unknown"),
            other => panic!("unexpected panel: {other:?}"),
        }
    }

    #[test]
    fn test_media_shown_on_other_monitor() {
        let state = AggregatedState::new()
            .with_snapshot(wm("A", "B", Some("code.exe")))
            .with_snapshot(ProviderSnapshot::Media(MediaOutput {
                current_session: Some(MediaSession {
                    title: Some("Song".to_string()),
                    artist: Some("Band".to_string()),
                    is_playing: true,
                }),
            }));

        match CenterPanel::build(&state, &ViewOptions::default()) {
            CenterPanel::Media(media) => {
                assert_eq!(media.text(), "Song — Band");
                assert_eq!(media.icon, "./icons/play-00.png");
                assert_eq!(media.on_left_click(), Some(ProviderCommand::TogglePlayPause));
            }
            other => panic!("unexpected panel: {other:?}"),
        }
    }

    #[test]
    fn test_missing_media_session_uses_fallbacks() {
        let state = AggregatedState::new()
            .with_snapshot(wm("A", "B", None))
            .with_snapshot(ProviderSnapshot::Media(MediaOutput::default()));

        match CenterPanel::build(&state, &ViewOptions::default()) {
            CenterPanel::Media(media) => {
                assert_eq!(media.title, "Unknown Track");
                assert_eq!(media.artist, "Unknown Artist");
                assert!(!media.is_playing);
                assert_eq!(media.icon, "./icons/play-01.png");
            }
            other => panic!("unexpected panel: {other:?}"),
        }
    }

    #[test]
    fn test_other_monitor_without_media_provider() {
        let state = AggregatedState::new().with_snapshot(wm("A", "B", None));
        assert_eq!(
            CenterPanel::build(&state, &ViewOptions::default()),
            CenterPanel::Empty
        );
    }
}
