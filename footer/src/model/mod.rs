mod playback_item;
mod snapshot;
mod volume;

pub use playback_item::{Album, Artist, Image, PlaybackItem};
pub use snapshot::PlaybackSnapshot;
pub use volume::VolumeLevel;
