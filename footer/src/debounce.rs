use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::timer::Timer;

type ActionFuture = Pin<Box<dyn Future<Output = ()> + Send>>;
type Action<T> = Arc<dyn Fn(T) -> ActionFuture + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    Idle,
    Pending,
}

#[derive(Default)]
struct Slot {
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

/// Last-write-wins debouncer.
///
/// Every [`schedule`](Debouncer::schedule) call throws away the value waiting
/// before it and restarts the quiet window. When the window elapses without
/// another call, the action runs once with the latest value. An action that
/// has already started is never aborted by a later schedule.
///
/// Scheduling spawns onto the current tokio runtime, so it must be called
/// from within one.
pub struct Debouncer<T> {
    window: Duration,
    timer: Arc<dyn Timer>,
    action: Action<T>,
    slot: Arc<Mutex<Slot>>,
}

impl<T: Send + 'static> std::fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("window", &self.window)
            .field("state", &self.state())
            .finish()
    }
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F, Fut>(window: Duration, timer: Arc<dyn Timer>, action: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let action: Action<T> = Arc::new(move |value: T| -> ActionFuture { Box::pin(action(value)) });
        Self {
            window,
            timer,
            action,
            slot: Arc::new(Mutex::new(Slot::default())),
        }
    }

    /// Arm the action for `value`, superseding anything still waiting
    pub fn schedule(&self, value: T) {
        let mut slot = lock(&self.slot);
        if let Some(handle) = slot.handle.take() {
            log::trace!("Superseding pending debounced call");
            handle.abort();
        }
        slot.generation = slot.generation.wrapping_add(1);

        let generation = slot.generation;
        let window = self.window;
        let timer = Arc::clone(&self.timer);
        let action = Arc::clone(&self.action);
        let shared = Arc::clone(&self.slot);

        slot.handle = Some(tokio::spawn(async move {
            timer.sleep(window).await;
            {
                let mut slot = lock(&shared);
                // A newer schedule may have landed between wake-up and lock.
                if slot.generation != generation {
                    return;
                }
                slot.handle = None;
            }
            action(value).await;
        }));
    }

    /// Drop the pending call without running it. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        let mut slot = lock(&self.slot);
        slot.generation = slot.generation.wrapping_add(1);
        match slot.handle.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    pub fn state(&self) -> DebounceState {
        if lock(&self.slot).handle.is_some() {
            DebounceState::Pending
        } else {
            DebounceState::Idle
        }
    }
}

fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}
