use async_trait::async_trait;
use mockall::mock;

use crate::client::StreamingClient;
use crate::error::Result;
use crate::model::{PlaybackItem, PlaybackSnapshot, VolumeLevel};

mock! {
    pub Client {}

    #[async_trait]
    impl StreamingClient for Client {
        async fn get_current_playback_state(&self) -> Result<PlaybackSnapshot>;
        async fn get_current_playing_track(&self) -> Result<PlaybackSnapshot>;
        async fn play(&self) -> Result<()>;
        async fn pause(&self) -> Result<()>;
        async fn skip_to_next(&self) -> Result<()>;
        async fn skip_to_previous(&self) -> Result<()>;
        async fn set_volume(&self, volume: VolumeLevel) -> Result<()>;
    }
}

/// Builds a [`MockClient`] where every call succeeds and the service reports
/// the configured track
pub struct MockClientBuilder {
  item: Option<PlaybackItem>,
  is_playing: bool,
}

impl MockClientBuilder {
  pub fn new() -> Self {
    Self {
      item: Some(
        PlaybackItem::new("Windowlicker")
          .with_artist("Aphex Twin")
          .with_album_art("https://i.scdn.co/image/windowlicker"),
      ),
      is_playing: true,
    }
  }

  pub fn item(mut self, item: Option<PlaybackItem>) -> Self {
    self.item = item;
    self
  }

  pub fn playing(mut self, is_playing: bool) -> Self {
    self.is_playing = is_playing;
    self
  }

  pub fn build(self) -> MockClient {
    let mut client = MockClient::new();
    let snapshot = PlaybackSnapshot {
      is_playing: self.is_playing,
      item: self.item,
      progress_ms: None,
    };

    let state = snapshot.clone();
    client
      .expect_get_current_playback_state()
      .returning(move || Ok(state.clone()));
    client
      .expect_get_current_playing_track()
      .returning(move || Ok(snapshot.clone()));

    client.expect_play().returning(|| Ok(()));
    client.expect_pause().returning(|| Ok(()));
    client.expect_skip_to_next().returning(|| Ok(()));
    client.expect_skip_to_previous().returning(|| Ok(()));
    client.expect_set_volume().returning(|_| Ok(()));

    client
  }
}

impl Default for MockClientBuilder {
  fn default() -> Self {
    Self::new()
  }
}
