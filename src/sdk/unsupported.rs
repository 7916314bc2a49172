use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::traits::{DeliveryHandler, PushSdk};
use super::types::{SdkError, SoundType, VibrateType};

/// Stand-in for platforms without a native push SDK.
///
/// Registration-style operations fail with a descriptive error; appearance
/// setters are accepted and dropped so shared frontend code keeps working.
#[derive(Debug, Default)]
pub struct UnsupportedSdk;

impl UnsupportedSdk {
    fn unsupported(operation: &'static str) -> SdkError {
        tracing::debug!("{operation} requested but no push sdk is available");
        SdkError::Unsupported { operation }
    }
}

#[async_trait]
impl PushSdk for UnsupportedSdk {
    fn configure(&self, _app_id: &str, _sender_id: &str) -> Result<(), SdkError> {
        Ok(())
    }

    fn set_delivery_handler(&self, _handler: Arc<dyn DeliveryHandler>) {}

    async fn register(&self) -> Result<String, SdkError> {
        Err(Self::unsupported("push registration"))
    }

    async fn unregister(&self) -> Result<String, SdkError> {
        Err(Self::unsupported("push unregistration"))
    }

    async fn set_tags(&self, _tags: Map<String, Value>) -> Result<(), SdkError> {
        Err(Self::unsupported("device tagging"))
    }

    async fn get_tags(&self) -> Result<Map<String, Value>, SdkError> {
        Err(Self::unsupported("device tagging"))
    }

    fn push_token(&self) -> Option<String> {
        None
    }

    fn hardware_id(&self) -> String {
        String::new()
    }

    fn set_user_id(&self, _user_id: &str) {}

    fn post_event(&self, event: &str, _attributes: Map<String, Value>) {
        tracing::debug!("dropping in-app event {event}: no push sdk available");
    }

    fn start_location_tracking(&self) {}

    fn stop_location_tracking(&self) {}

    fn set_badge_number(&self, _value: i32) {}

    fn badge_number(&self) -> i32 {
        0
    }

    fn add_badge_number(&self, _delta: i32) {}

    fn set_multi_notification_mode(&self, _enabled: bool) {}

    fn set_light_screen_on_notification(&self, _enabled: bool) {}

    fn set_enable_led(&self, _enabled: bool) {}

    fn set_color_led(&self, _color: u32) {}

    fn set_sound_type(&self, _sound: SoundType) {}

    fn set_vibrate_type(&self, _vibrate: VibrateType) {}

    fn set_show_notification_alert(&self, _enabled: bool) {}

    fn show_notification_alert(&self) -> bool {
        // The vendor default is alert-on.
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn registration_fails_with_a_descriptive_error() {
        let sdk = UnsupportedSdk;
        let err = sdk.register().await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "push registration is not supported on this platform"
        );
    }

    #[tokio::test]
    async fn tagging_is_unsupported() {
        let sdk = UnsupportedSdk;
        assert!(sdk.set_tags(Map::new()).await.is_err());
        assert!(sdk.get_tags().await.is_err());
    }

    #[test]
    fn getters_fall_back_to_vendor_defaults() {
        let sdk = UnsupportedSdk;
        assert_eq!(sdk.push_token(), None);
        assert_eq!(sdk.hardware_id(), "");
        assert_eq!(sdk.badge_number(), 0);
        assert!(sdk.show_notification_alert());
    }
}
