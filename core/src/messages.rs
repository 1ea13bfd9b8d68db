//! Human-readable status feed shown alongside the hero views.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Sink for status messages.
pub trait Logger: Send + Sync {
    fn add(&self, message: String);
}

/// In-memory, append-only message feed.
///
/// Clones share the same underlying list, so the service and the view that
/// renders the feed can each hold a handle.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the feed in append order.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave a half-pushed Vec behind.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Logger for MessageLog {
    fn add(&self, message: String) {
        self.lock().push(message);
    }
}
