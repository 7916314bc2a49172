use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use serde_json::Value;

use super::slot::PendingEventSlot;
use super::PushKind;
use crate::bus::{EventBus, EventCallback};
use crate::sdk::DeliveryHandler;

/// Route for emitting named events on the application's generic event
/// stream. Implemented by `tauri::AppHandle`; tests substitute a recorder.
pub trait EventSink: Send + Sync {
    fn emit_event(&self, event: &str, payload: &Value) -> Result<(), String>;
}

/// What `drain_on_demand` does with the payloads it pulls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainMode {
    /// Return the decoded payloads to the caller.
    Collect,
    /// Re-emit each payload on the application event stream instead of
    /// returning it. Used when no receiving callback is present.
    Broadcast,
}

/// Payloads pulled out of the pending slots by a drain.
#[derive(Debug, Default, Serialize)]
pub struct DrainedEvents {
    pub opened: Option<Value>,
    pub received: Option<Value>,
}

impl DrainedEvents {
    pub fn is_empty(&self) -> bool {
        self.opened.is_none() && self.received.is_none()
    }
}

#[derive(Default)]
struct CoordinatorState {
    opened: PendingEventSlot,
    received: PendingEventSlot,
    initialized: bool,
    session: Option<Arc<dyn EventSink>>,
}

impl CoordinatorState {
    fn slot(&self, kind: PushKind) -> &PendingEventSlot {
        match kind {
            PushKind::Opened => &self.opened,
            PushKind::Received => &self.received,
        }
    }

    fn slot_mut(&mut self, kind: PushKind) -> &mut PendingEventSlot {
        match kind {
            PushKind::Opened => &mut self.opened,
            PushKind::Received => &mut self.received,
        }
    }
}

/// Synchronization point between native push delivery threads and the
/// application's listener registration.
///
/// One mutex spans every check-then-mutate sequence, so a publish can never
/// slip between a consumer's emptiness check and its registration. Nothing
/// performed under the lock blocks: decode and in-process dispatch only.
pub struct DeliveryCoordinator {
    state: Mutex<CoordinatorState>,
    bus: EventBus,
}

impl DeliveryCoordinator {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CoordinatorState::default()),
            bus: EventBus::new(),
        }
    }

    /// A poisoned lock only means an application callback panicked while
    /// holding it; the native delivery path keeps going on the recovered
    /// state.
    fn lock(&self) -> MutexGuard<'_, CoordinatorState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Attach the route used for application event-stream emission.
    pub fn attach_session(&self, sink: Arc<dyn EventSink>) {
        self.lock().session = Some(sink);
    }

    /// Mark application configuration as completed. Gates stream emission.
    pub fn mark_initialized(&self) {
        self.lock().initialized = true;
    }

    /// Native delivery entry point; safe to call from any thread.
    ///
    /// The payload is buffered last-write-wins, dispatched to registered
    /// in-process subscribers, and emitted on the application event stream
    /// once a session is initialized. Failures are logged and contained; the
    /// native caller never sees them.
    pub fn publish(&self, kind: PushKind, raw: &str) {
        let mut state = self.lock();
        state.slot_mut(kind).store(raw);

        let payload: Value = match serde_json::from_str(raw) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("undecodable {kind} push payload buffered as-is: {e}");
                return;
            }
        };

        if state.slot(kind).consumer_registered() {
            self.bus.dispatch(kind.bus_key(), &payload);
        }

        match (&state.session, state.initialized) {
            (Some(session), true) => {
                if let Err(e) = session.emit_event(kind.stream_event(), &payload) {
                    tracing::warn!(
                        "failed to emit {} on the event stream: {e}",
                        kind.stream_event()
                    );
                }
            }
            _ => {
                tracing::debug!("no initialized session for {kind} push; payload stays buffered");
            }
        }
    }

    /// Register an in-process consumer for `kind`.
    ///
    /// If a payload was buffered before any consumer registered, it is
    /// delivered to `callback` synchronously, exactly once. The callback is
    /// also subscribed for every future publish of the kind.
    pub fn subscribe_or_drain(
        &self,
        kind: PushKind,
        callback: impl Fn(&Value) + Send + Sync + 'static,
    ) {
        let callback: Arc<EventCallback> = Arc::new(callback);
        let mut state = self.lock();

        let mut pending: Option<Value> = None;
        if !state.slot(kind).consumer_registered() {
            if let Some(raw) = state.slot(kind).raw() {
                match serde_json::from_str(raw) {
                    Ok(payload) => pending = Some(payload),
                    Err(e) => tracing::warn!(
                        "buffered {kind} payload does not decode, keeping it for a later drain: {e}"
                    ),
                }
            }
        }
        if pending.is_some() {
            state.slot_mut(kind).clear();
        }
        state.slot_mut(kind).set_consumer_registered();
        self.bus.subscribe(kind.bus_key(), Arc::clone(&callback));

        if let Some(payload) = pending {
            callback(&payload);
        }
    }

    /// Atomically pull whatever is buffered for both kinds.
    ///
    /// A pulled payload is removed from its slot and will not be delivered
    /// again by any other path. In broadcast mode the payloads go to the
    /// application event stream instead of the caller; without a session to
    /// emit on, they stay buffered. An undecodable payload stays buffered in
    /// either mode so a later drain can retry.
    pub fn drain_on_demand(&self, mode: DrainMode) -> DrainedEvents {
        let mut state = self.lock();
        let mut drained = DrainedEvents::default();

        for kind in [PushKind::Opened, PushKind::Received] {
            let Some(raw) = state.slot(kind).raw().map(str::to_owned) else {
                continue;
            };
            let payload: Value = match serde_json::from_str(&raw) {
                Ok(payload) => payload,
                Err(e) => {
                    tracing::warn!(
                        "buffered {kind} payload does not decode, keeping it for a later drain: {e}"
                    );
                    continue;
                }
            };

            match mode {
                DrainMode::Collect => {
                    state.slot_mut(kind).clear();
                    tracing::debug!("pumped buffered {kind} push");
                    match kind {
                        PushKind::Opened => drained.opened = Some(payload),
                        PushKind::Received => drained.received = Some(payload),
                    }
                }
                DrainMode::Broadcast => {
                    let Some(session) = state.session.clone() else {
                        tracing::debug!("no session to broadcast buffered {kind} push to; keeping it");
                        continue;
                    };
                    state.slot_mut(kind).clear();
                    if let Err(e) = session.emit_event(kind.stream_event(), &payload) {
                        tracing::warn!(
                            "failed to re-broadcast {} on the event stream: {e}",
                            kind.stream_event()
                        );
                    }
                }
            }
        }

        drained
    }

    /// Reset to the cold-start state on session destruction.
    ///
    /// Undelivered payloads are discarded along with the session that would
    /// have received them. Bus subscriptions survive: the process continues,
    /// and a fresh registration cycle follows.
    pub fn teardown(&self) {
        let mut state = self.lock();
        if state.opened.raw().is_some() || state.received.raw().is_some() {
            tracing::debug!("discarding undelivered push payloads on session teardown");
        }
        state.opened.reset();
        state.received.reset();
        tracing::debug!("delivery coordinator torn down");
    }
}

impl Default for DeliveryCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl DeliveryHandler for DeliveryCoordinator {
    fn push_opened(&self, raw: &str) {
        tracing::info!("push opened: {raw}");
        self.publish(PushKind::Opened, raw);
    }

    fn push_received(&self, raw: &str) {
        tracing::info!("push received: {raw}");
        self.publish(PushKind::Received, raw);
    }
}
