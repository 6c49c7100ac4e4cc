mod reducers;
mod store;

pub use reducers::{playback_reducer, PlaybackAction};
pub use store::{PlaybackState, Store};
