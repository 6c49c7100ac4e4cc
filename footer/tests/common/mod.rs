//! Shared fakes for the footer integration tests.
//!
//! `ScriptedClient` records every call with the (tokio) time it was made and
//! answers "currently playing" requests from a queue, each with its own
//! latency, so tests can line up races between overlapping skips.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use footer::{
    Footer, FooterBuilder, FooterConfig, FooterError, PlaybackSnapshot, Result, Store,
    StreamingClient, Timer, VolumeLevel,
};
use log::{Level, LevelFilter, Log, Metadata, Record};
use tokio::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    PlaybackState,
    CurrentTrack,
    Play,
    Pause,
    Next,
    Previous,
    SetVolume(u8),
}

struct Scripted {
    latency: Duration,
    result: Result<PlaybackSnapshot>,
}

pub struct ScriptedClient {
    started: Instant,
    calls: Mutex<Vec<(Duration, Call)>>,
    playback_state: Mutex<Result<PlaybackSnapshot>>,
    current_tracks: Mutex<VecDeque<Scripted>>,
    command_error: Mutex<Option<FooterError>>,
    command_latency: Mutex<Duration>,
    volume_error: Mutex<Option<FooterError>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            calls: Mutex::new(Vec::new()),
            playback_state: Mutex::new(Ok(PlaybackSnapshot::default())),
            current_tracks: Mutex::new(VecDeque::new()),
            command_error: Mutex::new(None),
            command_latency: Mutex::new(Duration::ZERO),
            volume_error: Mutex::new(None),
        }
    }

    pub fn set_playback_state(&self, result: Result<PlaybackSnapshot>) {
        *self.playback_state.lock().unwrap() = result;
    }

    /// Queue the answer to the next "currently playing" request
    pub fn push_current_track(&self, latency: Duration, result: Result<PlaybackSnapshot>) {
        self.current_tracks
            .lock()
            .unwrap()
            .push_back(Scripted { latency, result });
    }

    /// Make play/pause/skip calls fail with `error`
    pub fn fail_commands(&self, error: FooterError) {
        *self.command_error.lock().unwrap() = Some(error);
    }

    /// Make play/pause/skip calls take `latency` before answering
    pub fn delay_commands(&self, latency: Duration) {
        *self.command_latency.lock().unwrap() = latency;
    }

    pub fn fail_volume(&self, error: Option<FooterError>) {
        *self.volume_error.lock().unwrap() = error;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.timed_calls().into_iter().map(|(_, call)| call).collect()
    }

    pub fn timed_calls(&self) -> Vec<(Duration, Call)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn volume_calls(&self) -> Vec<u8> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::SetVolume(percent) => Some(percent),
                _ => None,
            })
            .collect()
    }

    /// Time since the client was created at which `call` was first made
    pub fn time_of(&self, call: &Call) -> Option<Duration> {
        self.timed_calls()
            .into_iter()
            .find(|(_, made)| made == call)
            .map(|(at, _)| at)
    }

    fn record(&self, call: Call) {
        let at = self.started.elapsed();
        self.calls.lock().unwrap().push((at, call));
    }

    async fn command_result(&self) -> Result<()> {
        let latency = *self.command_latency.lock().unwrap();
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        match self.command_error.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl StreamingClient for ScriptedClient {
    async fn get_current_playback_state(&self) -> Result<PlaybackSnapshot> {
        self.record(Call::PlaybackState);
        self.playback_state.lock().unwrap().clone()
    }

    async fn get_current_playing_track(&self) -> Result<PlaybackSnapshot> {
        self.record(Call::CurrentTrack);
        let scripted = self.current_tracks.lock().unwrap().pop_front();
        match scripted {
            Some(Scripted { latency, result }) => {
                tokio::time::sleep(latency).await;
                result
            }
            None => Err(FooterError::Service {
                status: 500,
                message: "no scripted response".to_string(),
            }),
        }
    }

    async fn play(&self) -> Result<()> {
        self.record(Call::Play);
        self.command_result().await
    }

    async fn pause(&self) -> Result<()> {
        self.record(Call::Pause);
        self.command_result().await
    }

    async fn skip_to_next(&self) -> Result<()> {
        self.record(Call::Next);
        self.command_result().await
    }

    async fn skip_to_previous(&self) -> Result<()> {
        self.record(Call::Previous);
        self.command_result().await
    }

    async fn set_volume(&self, volume: VolumeLevel) -> Result<()> {
        self.record(Call::SetVolume(volume.percent()));
        match self.volume_error.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Timer that returns immediately and remembers every requested delay
#[derive(Default)]
pub struct RecordingTimer {
    requested: Mutex<Vec<Duration>>,
}

impl RecordingTimer {
    pub fn requested(&self) -> Vec<Duration> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl Timer for RecordingTimer {
    async fn sleep(&self, duration: Duration) {
        self.requested.lock().unwrap().push(duration);
        tokio::task::yield_now().await;
    }
}

pub fn footer_with(client: &Arc<ScriptedClient>, store: Store) -> Footer<ScriptedClient> {
    FooterBuilder::with_shared_client(Arc::clone(client))
        .with_store(store)
        .build()
        .expect("default config is valid")
}

pub fn footer_with_config(
    client: &Arc<ScriptedClient>,
    config: FooterConfig,
) -> Footer<ScriptedClient> {
    FooterBuilder::with_shared_client(Arc::clone(client))
        .with_config(config)
        .build()
        .expect("config is valid")
}

pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

thread_local! {
    static CAPTURED: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Logger that keeps records from the footer crate per thread, so
/// current-thread tokio tests only see what they emitted themselves.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("footer")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            CAPTURED.with(|captured| {
                captured
                    .borrow_mut()
                    .push((record.level(), record.args().to_string()))
            });
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL_LOGGER: Once = Once::new();

/// Start capturing log records on the current thread
pub fn capture_logs() {
    INSTALL_LOGGER.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    CAPTURED.with(|captured| captured.borrow_mut().clear());
}

pub fn logged(level: Level) -> Vec<String> {
    CAPTURED.with(|captured| {
        captured
            .borrow()
            .iter()
            .filter(|(at, _)| *at == level)
            .map(|(_, message)| message.clone())
            .collect()
    })
}
