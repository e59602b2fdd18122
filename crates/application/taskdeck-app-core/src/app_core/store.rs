use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use taskdeck_config::EVENT_CHANNEL_CAPACITY;
use tokio::sync::broadcast;

use crate::domain::AppState;

use super::{events::DomainEvent, reducer::reduce};

/// Shared application state. Every mutation goes through [`AppStore::apply`],
/// and each applied event is re-broadcast to subscribers after the state has
/// been updated. The lock is never held across an await point.
#[derive(Clone)]
pub struct AppStore {
    inner: Arc<Mutex<AppState>>,
    events: broadcast::Sender<DomainEvent>,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl AppStore {
    pub fn new(state: AppState) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(Mutex::new(state)),
            events,
        }
    }

    fn lock(&self) -> MutexGuard<'_, AppState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> AppState {
        self.lock().clone()
    }

    pub fn select<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.lock())
    }

    /// Subscribers see events in the order they were reduced: the send
    /// happens under the same lock, and it never blocks.
    pub fn apply(&self, ev: DomainEvent) {
        let mut guard = self.lock();
        let current = std::mem::take(&mut *guard);
        *guard = reduce(current, ev.clone());
        // No subscribers is fine.
        let _ = self.events.send(ev);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.events.subscribe()
    }
}
