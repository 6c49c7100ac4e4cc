use crate::model::VolumeLevel;
use crate::state::PlaybackState;

pub const NO_SONG_TITLE: &str = "No song is playing";
pub const NO_SONG_ARTISTS: &str = "...";

/// Everything a front end needs to draw the bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub title: String,
    pub artists: String,
    pub album_art_url: Option<String>,
    pub has_track: bool,
    pub playing: bool,
    pub volume: VolumeLevel,
}

impl NowPlaying {
    pub fn from_state(state: &PlaybackState, volume: VolumeLevel) -> Self {
        match &state.item {
            Some(item) => Self {
                title: item.name.clone(),
                artists: item.artist_names(),
                album_art_url: item.album_art_url().map(str::to_string),
                has_track: true,
                playing: state.playing,
                volume,
            },
            None => Self {
                title: NO_SONG_TITLE.to_string(),
                artists: NO_SONG_ARTISTS.to_string(),
                album_art_url: None,
                has_track: false,
                playing: state.playing,
                volume,
            },
        }
    }
}
