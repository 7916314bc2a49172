use serde_json::{Map, Value};
use tauri::State;

use crate::{Error, PluginState};

/// Attach key/value tags to the device on the vendor side.
#[tauri::command]
pub async fn set_tags(
    state: State<'_, PluginState>,
    tags: Map<String, Value>,
) -> Result<(), Error> {
    Ok(state.sdk.set_tags(tags).await?)
}

/// Fetch the tags currently stored for the device.
#[tauri::command]
pub async fn get_tags(state: State<'_, PluginState>) -> Result<Map<String, Value>, Error> {
    Ok(state.sdk.get_tags().await?)
}

/// Associate a user identifier so events match across the user's devices.
#[tauri::command]
pub fn set_user_id(state: State<'_, PluginState>, user_id: String) {
    state.sdk.set_user_id(&user_id);
}

/// Post an in-app messaging event with optional attributes.
#[tauri::command]
pub fn post_event(
    state: State<'_, PluginState>,
    event: String,
    attributes: Option<Map<String, Value>>,
) {
    state.sdk.post_event(&event, attributes.unwrap_or_default());
}
