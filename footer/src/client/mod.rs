mod web_api;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{PlaybackSnapshot, VolumeLevel};

pub use web_api::{WebApiClient, DEFAULT_API_BASE};

/// Operations the footer needs from a streaming service.
///
/// [`WebApiClient`] talks to the real HTTP API; tests substitute
/// `mock::MockClient` or a scripted fake.
#[async_trait]
pub trait StreamingClient: Send + Sync {
    /// Full playback status for the user's active device
    async fn get_current_playback_state(&self) -> Result<PlaybackSnapshot>;

    /// The track the user's active device is playing right now
    async fn get_current_playing_track(&self) -> Result<PlaybackSnapshot>;

    async fn play(&self) -> Result<()>;
    async fn pause(&self) -> Result<()>;
    async fn skip_to_next(&self) -> Result<()>;
    async fn skip_to_previous(&self) -> Result<()>;

    async fn set_volume(&self, volume: VolumeLevel) -> Result<()>;
}
