//! Session-change broadcast channel.
//!
//! The provider publishes every session change (login, logout, OAuth return)
//! here; subscribers receive the new session synchronously. Subscriptions are
//! released through their handle, and releasing twice is harmless: dropping
//! an already-unsubscribed handle does nothing.

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use crate::net::types::Session;

type Listener = Arc<dyn Fn(Option<&Session>) + Send + Sync>;
type Registry = Mutex<HashMap<u64, Listener>>;

/// Broadcast channel for session changes. Cheap to clone; clones share the
/// subscriber registry.
#[derive(Clone, Default)]
pub struct AuthChannel {
    registry: Arc<Registry>,
    next_id: Arc<AtomicU64>,
}

impl AuthChannel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. The returned handle unsubscribes on `release`
    /// or on drop, whichever comes first.
    pub fn subscribe(
        &self,
        listener: impl Fn(Option<&Session>) + Send + Sync + 'static,
    ) -> AuthSubscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut registry) = self.registry.lock() {
            registry.insert(id, Arc::new(listener));
        }
        AuthSubscription { registry: Arc::downgrade(&self.registry), id }
    }

    /// Notify every live subscriber of a session change.
    pub fn publish(&self, session: Option<&Session>) {
        // Snapshot the listeners first so a listener may subscribe or
        // unsubscribe reentrantly without deadlocking.
        let listeners: Vec<Listener> = match self.registry.lock() {
            Ok(registry) => registry.values().cloned().collect(),
            Err(_) => return,
        };
        for listener in listeners {
            listener(session);
        }
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.registry.lock().map(|r| r.len()).unwrap_or(0)
    }
}

/// Handle to one channel subscription.
pub struct AuthSubscription {
    registry: Weak<Registry>,
    id: u64,
}

impl AuthSubscription {
    /// Remove the listener from the channel. Idempotent: later calls and
    /// the eventual drop find nothing to remove.
    pub fn release(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if let Ok(mut registry) = registry.lock() {
                registry.remove(&self.id);
            }
        }
        self.registry = Weak::new();
    }
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        self.release();
    }
}
