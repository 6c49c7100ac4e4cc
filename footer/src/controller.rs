use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::client::StreamingClient;
use crate::config::FooterConfig;
use crate::debounce::{DebounceState, Debouncer};
use crate::error::{FooterError, Result};
use crate::model::{PlaybackSnapshot, VolumeLevel};
use crate::state::{PlaybackAction, Store};
use crate::timer::{Timer, TokioTimer};
use crate::view::NowPlaying;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipDirection {
    Next,
    Previous,
}

impl fmt::Display for SkipDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipDirection::Next => write!(f, "next"),
            SkipDirection::Previous => write!(f, "previous"),
        }
    }
}

/// Playback control bar.
///
/// Keeps the shared [`Store`] in step with the streaming service and turns
/// user input into service calls. Every failure is logged and returned; no
/// operation retries or rolls back an optimistic update.
pub struct Footer<C: StreamingClient + 'static> {
    client: Arc<C>,
    store: Store,
    timer: Arc<dyn Timer>,
    config: FooterConfig,
    volume: Mutex<VolumeLevel>,
    volume_updates: Debouncer<VolumeLevel>,
}

impl<C: StreamingClient + 'static> fmt::Debug for Footer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Footer")
            .field("store", &self.store)
            .field("config", &self.config)
            .field("volume", &self.volume())
            .field("volume_updates", &self.volume_updates)
            .finish()
    }
}

impl<C: StreamingClient + 'static> Footer<C> {
    /// Create a footer with its own store and default timings
    pub fn new(client: C) -> Self {
        Self::from_parts(
            Arc::new(client),
            Store::new(),
            Arc::new(TokioTimer),
            FooterConfig::default(),
        )
    }

    fn from_parts(client: Arc<C>, store: Store, timer: Arc<dyn Timer>, config: FooterConfig) -> Self {
        let sink = Arc::clone(&client);
        let volume_updates = Debouncer::new(
            config.volume_debounce,
            Arc::clone(&timer),
            move |volume: VolumeLevel| {
                let client = Arc::clone(&sink);
                async move {
                    if let Err(e) = client.set_volume(volume).await {
                        log::error!("Error setting volume to {}: {}", volume, e);
                    }
                }
            },
        );

        Self {
            client,
            store,
            timer,
            volume: Mutex::new(config.initial_volume),
            config,
            volume_updates,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn config(&self) -> &FooterConfig {
        &self.config
    }

    /// Load the current playback status into the store.
    ///
    /// Meant to run once when the footer is mounted.
    pub async fn initialize(&self) -> Result<()> {
        let snapshot = self
            .client
            .get_current_playback_state()
            .await
            .inspect_err(|e| log::error!("Error getting current playback state: {}", e))?;

        log::debug!("Current playback state: {:?}", snapshot);

        self.store.dispatch(PlaybackAction::SetPlaying(snapshot.is_playing));
        self.store.dispatch(PlaybackAction::SetItem(snapshot.item));
        Ok(())
    }

    /// Flip between playing and paused.
    ///
    /// The store is updated before the service call resolves and is left
    /// as-is if the call fails.
    pub async fn toggle_play_pause(&self) -> Result<()> {
        let playing = self.store.is_playing();
        let request = if playing {
            self.client.pause()
        } else {
            self.client.play()
        };

        self.store.dispatch(PlaybackAction::SetPlaying(!playing));

        request.await.inspect_err(|e| {
            let action = if playing { "pause" } else { "play" };
            log::error!("Error requesting {}: {}", action, e);
        })
    }

    pub async fn skip_next(&self) -> Result<()> {
        self.skip(SkipDirection::Next).await
    }

    pub async fn skip_previous(&self) -> Result<()> {
        self.skip(SkipDirection::Previous).await
    }

    /// Skip, wait for the service to settle, then load whatever is now playing.
    ///
    /// Concurrent skips are not sequenced: whichever follow-up fetch resolves
    /// last decides what the store shows.
    pub async fn skip(&self, direction: SkipDirection) -> Result<()> {
        let request = match direction {
            SkipDirection::Next => self.client.skip_to_next(),
            SkipDirection::Previous => self.client.skip_to_previous(),
        };
        request
            .await
            .inspect_err(|e| log::error!("Error skipping to {} track: {}", direction, e))?;

        // "Currently playing" lags behind a skip and may still report the old track.
        self.timer.sleep(self.config.skip_settle_delay).await;

        let snapshot = self
            .client
            .get_current_playing_track()
            .await
            .inspect_err(|e| log::error!("Error getting current playing track: {}", e))?;

        log::debug!("Current playing track after skip: {:?}", snapshot);
        self.apply_current_track(snapshot)
    }

    fn apply_current_track(&self, snapshot: PlaybackSnapshot) -> Result<()> {
        let Some(item) = snapshot.item else {
            log::error!("Invalid track data received: {:?}", snapshot);
            return Err(FooterError::MalformedResponse(
                "current track response has no item".to_string(),
            ));
        };

        self.store.dispatch(PlaybackAction::SetItem(Some(item)));
        self.store.dispatch(PlaybackAction::SetPlaying(snapshot.is_playing));
        Ok(())
    }

    /// React to the volume slider moving.
    ///
    /// The local level changes immediately; the service only hears about the
    /// last value once the slider has been still for the debounce window.
    /// Must be called from within a tokio runtime.
    pub fn on_slider_change(&self, value: f64) {
        let volume = VolumeLevel::from_slider(value);
        *self.volume.lock().unwrap_or_else(PoisonError::into_inner) = volume;
        self.volume_updates.schedule(volume);
    }

    /// Volume currently shown on the slider
    pub fn volume(&self) -> VolumeLevel {
        *self.volume.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn volume_update_state(&self) -> DebounceState {
        self.volume_updates.state()
    }

    pub fn now_playing(&self) -> NowPlaying {
        let volume = self.volume();
        self.store
            .with_state(|state| NowPlaying::from_state(state, volume))
    }
}

/// Assembles a [`Footer`] around an existing store or a custom timer
///
/// ```rust,no_run
/// use footer::{FooterBuilder, FooterConfig, Store, WebApiClient};
/// use std::time::Duration;
///
/// let store = Store::new();
/// let config = FooterConfig::new().with_volume_debounce(Duration::from_millis(200))?;
/// let footer = FooterBuilder::new(WebApiClient::new("token")?)
///     .with_store(store.clone())
///     .with_config(config)
///     .build()?;
/// # Ok::<(), footer::FooterError>(())
/// ```
pub struct FooterBuilder<C: StreamingClient + 'static> {
    client: Arc<C>,
    store: Option<Store>,
    timer: Option<Arc<dyn Timer>>,
    config: FooterConfig,
}

impl<C: StreamingClient + 'static> FooterBuilder<C> {
    pub fn new(client: C) -> Self {
        Self::with_shared_client(Arc::new(client))
    }

    /// Use a client that other parts of the application also hold
    pub fn with_shared_client(client: Arc<C>) -> Self {
        Self {
            client,
            store: None,
            timer: None,
            config: FooterConfig::default(),
        }
    }

    pub fn with_store(mut self, store: Store) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_timer(mut self, timer: Arc<dyn Timer>) -> Self {
        self.timer = Some(timer);
        self
    }

    pub fn with_config(mut self, config: FooterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<Footer<C>> {
        self.config.validate()?;
        Ok(Footer::from_parts(
            self.client,
            self.store.unwrap_or_default(),
            self.timer.unwrap_or_else(|| Arc::new(TokioTimer)),
            self.config,
        ))
    }
}
