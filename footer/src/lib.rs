pub mod client;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod model;
pub mod state;
pub mod timer;
pub mod view;

// Re-export key types for easier access
pub use client::{StreamingClient, WebApiClient};
pub use config::FooterConfig;
pub use debounce::{DebounceState, Debouncer};
pub use error::{FooterError, Result};
pub use controller::{Footer, FooterBuilder, SkipDirection};
pub use model::{Album, Artist, Image, PlaybackItem, PlaybackSnapshot, VolumeLevel};
pub use state::{playback_reducer, PlaybackAction, PlaybackState, Store};
pub use timer::{Timer, TokioTimer};
pub use view::NowPlaying;
