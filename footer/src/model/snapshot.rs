use serde::{Deserialize, Serialize};

use super::PlaybackItem;

/// Playback status returned by the "current playback" and "currently playing"
/// endpoints. `item` is absent when nothing is loaded or the service sent a
/// partial response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    #[serde(default)]
    pub is_playing: bool,
    #[serde(default)]
    pub item: Option<PlaybackItem>,
    #[serde(default)]
    pub progress_ms: Option<u64>,
}

impl PlaybackSnapshot {
    pub fn playing(item: PlaybackItem) -> Self {
        Self {
            is_playing: true,
            item: Some(item),
            progress_ms: None,
        }
    }

    pub fn paused(item: PlaybackItem) -> Self {
        Self {
            is_playing: false,
            item: Some(item),
            progress_ms: None,
        }
    }
}
