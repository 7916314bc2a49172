//! Traits forming the vendor SDK call contract.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::types::{SdkError, SoundType, VibrateType};

/// Callback surface the native delivery path invokes when a push arrives.
/// Payloads are the raw serialized JSON handed over by the platform SDK.
pub trait DeliveryHandler: Send + Sync {
    fn push_opened(&self, raw: &str);
    fn push_received(&self, raw: &str);
}

/// Vendor push SDK capabilities, one implementation per target platform.
///
/// Asynchronous operations resolve to a value or a vendor error with a
/// human-readable message; the remaining methods mirror the vendor's
/// synchronous surface.
#[async_trait]
pub trait PushSdk: Send + Sync {
    /// Store the application id and sender id ahead of registration.
    fn configure(&self, app_id: &str, sender_id: &str) -> Result<(), SdkError>;

    /// Route incoming push callbacks into the bridge.
    fn set_delivery_handler(&self, handler: Arc<dyn DeliveryHandler>);

    async fn register(&self) -> Result<String, SdkError>;
    async fn unregister(&self) -> Result<String, SdkError>;

    async fn set_tags(&self, tags: Map<String, Value>) -> Result<(), SdkError>;
    async fn get_tags(&self) -> Result<Map<String, Value>, SdkError>;

    /// Push token obtained by registration, if any.
    fn push_token(&self) -> Option<String>;
    /// Hardware id the vendor uses for API communication.
    fn hardware_id(&self) -> String;

    fn set_user_id(&self, user_id: &str);
    fn post_event(&self, event: &str, attributes: Map<String, Value>);

    fn start_location_tracking(&self);
    fn stop_location_tracking(&self);

    fn set_badge_number(&self, value: i32);
    fn badge_number(&self) -> i32;
    fn add_badge_number(&self, delta: i32);

    fn set_multi_notification_mode(&self, enabled: bool);
    fn set_light_screen_on_notification(&self, enabled: bool);
    fn set_enable_led(&self, enabled: bool);
    fn set_color_led(&self, color: u32);
    fn set_sound_type(&self, sound: SoundType);
    fn set_vibrate_type(&self, vibrate: VibrateType);
    fn set_show_notification_alert(&self, enabled: bool);
    fn show_notification_alert(&self) -> bool;
}
