//! Media-session provider output.

use serde::{Deserialize, Serialize};

/// Fallback shown when the session has no title.
pub const UNKNOWN_TRACK: &str = "Unknown Track";
/// Fallback shown when the session has no artist.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// The current media session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaSession {
    /// Track title.
    pub title: Option<String>,
    /// Track artist.
    pub artist: Option<String>,
    /// Whether playback is running.
    #[serde(deserialize_with = "crate::models::serde_util::null_as_default")]
    pub is_playing: bool,
}

impl MediaSession {
    /// Returns the title or [`UNKNOWN_TRACK`].
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or(UNKNOWN_TRACK)
    }

    /// Returns the artist or [`UNKNOWN_ARTIST`].
    pub fn artist_or_default(&self) -> &str {
        self.artist.as_deref().unwrap_or(UNKNOWN_ARTIST)
    }
}

/// Media provider output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaOutput {
    /// The session the OS considers current.
    pub current_session: Option<MediaSession>,
}
