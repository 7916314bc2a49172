//! Push notification bridge plugin backend.
//!
//! This is the entry point for the plugin. It handles:
//! - Plugin initialization and state management
//! - Tauri command registration and IPC handling
//! - Cold-start buffering of pushes that arrive before the frontend listens
//! - Session lifecycle wiring (page load, window destruction)
//!
//! # Architecture
//!
//! The plugin follows a modular architecture:
//! - `commands`: Tauri command handlers (IPC entry points)
//! - `delivery`: coordinator reconciling native delivery threads with
//!   frontend listener registration
//! - `bus`: in-process publish/subscribe fan-out for push callbacks
//! - `sdk`: the vendor push SDK boundary

mod bus;
mod commands;
mod delivery;
pub mod sdk;

use std::sync::Arc;

use serde::Deserialize;
use tauri::plugin::{Builder as PluginBuilder, TauriPlugin};
use tauri::webview::PageLoadEvent;
use tauri::{Manager, RunEvent, Runtime, WindowEvent};

use delivery::{DeliveryCoordinator, DrainMode, EventSink};
use sdk::{DeliveryHandler, PushSdk, UnsupportedSdk};

pub use delivery::DrainedEvents;

// ---------------------------------------------------------------------------
// Shared error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Config(String),
    #[error(transparent)]
    Sdk(#[from] sdk::SdkError),
}

impl serde::Serialize for Error {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

// ---------------------------------------------------------------------------
// Shared types
// ---------------------------------------------------------------------------

/// Initialization payload sent by the frontend before anything else.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InitConfig {
    #[serde(default)]
    pub app_id: Option<String>,
    #[serde(default)]
    pub sender_id: Option<String>,
}

impl InitConfig {
    /// Both identifiers are required before the vendor SDK is touched.
    pub(crate) fn validate(self) -> Result<(String, String), Error> {
        let app_id = self.app_id.filter(|v| !v.trim().is_empty());
        let sender_id = self.sender_id.filter(|v| !v.trim().is_empty());
        match (app_id, sender_id) {
            (Some(app_id), Some(sender_id)) => Ok((app_id, sender_id)),
            _ => Err(Error::Config(
                "application id and sender id must both be specified".to_string(),
            )),
        }
    }
}

pub(crate) struct PluginState {
    pub coordinator: Arc<DeliveryCoordinator>,
    pub sdk: Arc<dyn PushSdk>,
}

impl<R: Runtime> EventSink for tauri::AppHandle<R> {
    fn emit_event(&self, event: &str, payload: &serde_json::Value) -> Result<(), String> {
        tauri::Emitter::emit(self, event, payload.clone()).map_err(|e| e.to_string())
    }
}

// ---------------------------------------------------------------------------
// Plugin entry point
// ---------------------------------------------------------------------------

/// Initialize the plugin with no platform push SDK attached.
///
/// Registration-style operations will fail with a descriptive error; the
/// delivery and command surface stays fully functional so shared frontend
/// code runs unchanged.
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    init_with_sdk(Arc::new(UnsupportedSdk))
}

/// Initialize the plugin on top of a concrete vendor push SDK.
pub fn init_with_sdk<R: Runtime>(sdk: Arc<dyn PushSdk>) -> TauriPlugin<R> {
    PluginBuilder::new("pushbridge")
        .invoke_handler(tauri::generate_handler![
            // registration
            commands::registration::init,
            commands::registration::register,
            commands::registration::unregister,
            commands::registration::get_push_token,
            commands::registration::get_hwid,
            // push events
            commands::events::on_push_opened,
            commands::events::on_push_received,
            commands::events::pump,
            // tags and in-app messaging
            commands::tags::set_tags,
            commands::tags::get_tags,
            commands::tags::set_user_id,
            commands::tags::post_event,
            // badge
            commands::badge::set_application_icon_badge_number,
            commands::badge::get_application_icon_badge_number,
            commands::badge::add_to_application_icon_badge_number,
            // location
            commands::location::start_location_tracking,
            commands::location::stop_location_tracking,
            // notification appearance
            commands::notifications::set_multi_notification_mode,
            commands::notifications::set_light_screen_on_notification,
            commands::notifications::set_enable_led,
            commands::notifications::set_color_led,
            commands::notifications::set_sound_type,
            commands::notifications::set_vibrate_type,
            commands::notifications::set_show_notification_alert,
            commands::notifications::get_show_notification_alert,
        ])
        .setup(move |app, _api| {
            let coordinator = Arc::new(DeliveryCoordinator::new());
            coordinator.attach_session(Arc::new(app.clone()));

            let handler: Arc<dyn DeliveryHandler> = coordinator.clone();
            sdk.set_delivery_handler(handler);

            app.manage(PluginState {
                coordinator,
                sdk: sdk.clone(),
            });

            tracing::info!("pushbridge plugin ready");
            Ok(())
        })
        .on_page_load(|webview, payload| {
            if matches!(payload.event(), PageLoadEvent::Finished) {
                // A fresh frontend attached without pulling; put any buffered
                // cold-start pushes onto the event stream.
                let state = webview.state::<PluginState>();
                state.coordinator.drain_on_demand(DrainMode::Broadcast);
            }
        })
        .on_event(|app, event| match event {
            RunEvent::WindowEvent {
                event: WindowEvent::Destroyed,
                ..
            }
            | RunEvent::Exit => {
                if let Some(state) = app.try_state::<PluginState>() {
                    state.coordinator.teardown();
                }
            }
            _ => {}
        })
        .build()
}
