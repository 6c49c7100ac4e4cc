use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::model::PlaybackItem;

use super::reducers::{self, PlaybackAction};

/// Playback state shared by every part of the UI session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackState {
    pub item: Option<PlaybackItem>,
    pub playing: bool,
}

/// Shared playback store.
///
/// Cloning hands out another handle to the same state. The only way to
/// change it is [`Store::dispatch`], which runs the reducer under the lock.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: Arc<Mutex<PlaybackState>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial(state: PlaybackState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn dispatch(&self, action: PlaybackAction) {
        let mut state = self.lock();
        reducers::playback_reducer(&mut state, action);
    }

    pub fn with_state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&PlaybackState) -> T,
    {
        let state = self.lock();
        f(&state)
    }

    pub fn snapshot(&self) -> PlaybackState {
        self.with_state(Clone::clone)
    }

    pub fn is_playing(&self) -> bool {
        self.with_state(|state| state.playing)
    }

    // The reducer never panics midway, so a poisoned lock still holds a
    // consistent state.
    fn lock(&self) -> MutexGuard<'_, PlaybackState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
