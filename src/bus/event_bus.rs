use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;
use uuid::Uuid;

/// Callback signature for in-process push event subscribers.
pub type EventCallback = dyn Fn(&Value) + Send + Sync;

#[derive(Clone)]
struct Subscriber {
    id: Uuid,
    callback: Arc<EventCallback>,
}

/// In-process publish/subscribe registry keyed by event name.
///
/// Subscribers are append-only and never replaced; dispatch happens in
/// subscription order, and a panicking subscriber never prevents the
/// remaining ones from running.
pub struct EventBus {
    subscribers: DashMap<String, Vec<Subscriber>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            subscribers: DashMap::new(),
        }
    }

    /// Append `callback` to the subscriber list for `event` and return its
    /// subscription id.
    pub fn subscribe(&self, event: &str, callback: Arc<EventCallback>) -> Uuid {
        let id = Uuid::new_v4();
        self.subscribers
            .entry(event.to_string())
            .or_default()
            .push(Subscriber { id, callback });
        id
    }

    /// Invoke every subscriber registered for `event`, in subscription order.
    /// A key with no subscribers is a no-op.
    pub fn dispatch(&self, event: &str, payload: &Value) {
        // Snapshot outside the shard lock so a subscriber that re-enters the
        // bus cannot deadlock the dispatch.
        let snapshot: Vec<Subscriber> = match self.subscribers.get(event) {
            Some(entry) => entry.value().clone(),
            None => return,
        };

        for subscriber in snapshot {
            if catch_unwind(AssertUnwindSafe(|| (subscriber.callback)(payload))).is_err() {
                tracing::warn!(
                    "subscriber {} for {event} panicked, skipping it",
                    subscriber.id
                );
            }
        }
    }

    #[cfg(test)]
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.subscribers.get(event).map_or(0, |entry| entry.len())
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
