use serde_json::Value;
use tauri::ipc::Channel;
use tauri::State;

use crate::delivery::{DrainMode, DrainedEvents, PushKind};
use crate::PluginState;

fn subscribe(state: &PluginState, kind: PushKind, channel: Channel<Value>) {
    state.coordinator.subscribe_or_drain(kind, move |payload| {
        if let Err(e) = channel.send(payload.clone()) {
            tracing::warn!("failed to forward {kind} push over ipc: {e}");
        }
    });
}

/// Subscribe to opened pushes. A push opened before this call is delivered
/// over the channel immediately, exactly once.
#[tauri::command]
pub fn on_push_opened(state: State<'_, PluginState>, on_push: Channel<Value>) {
    subscribe(state.inner(), PushKind::Opened, on_push);
}

/// Subscribe to received pushes, with the same cold-start guarantee as
/// `on_push_opened`.
#[tauri::command]
pub fn on_push_received(state: State<'_, PluginState>, on_push: Channel<Value>) {
    subscribe(state.inner(), PushKind::Received, on_push);
}

/// Pull-style alternative to the channel subscriptions: atomically fetch and
/// clear whatever cold-start push data is buffered.
#[tauri::command]
pub fn pump(state: State<'_, PluginState>) -> DrainedEvents {
    state.coordinator.drain_on_demand(DrainMode::Collect)
}
