use tauri::State;

use crate::{Error, InitConfig, PluginState};

/// Configure the vendor SDK with the application and sender identifiers.
/// Buffered cold-start pushes start flowing to the event stream afterwards.
#[tauri::command]
pub fn init(state: State<'_, PluginState>, config: InitConfig) -> Result<(), Error> {
    let (app_id, sender_id) = config.validate()?;
    state.sdk.configure(&app_id, &sender_id)?;
    state.coordinator.mark_initialized();
    Ok(())
}

/// Register the device for push notifications; resolves with the push token.
#[tauri::command]
pub async fn register(state: State<'_, PluginState>) -> Result<String, Error> {
    Ok(state.sdk.register().await?)
}

/// Unregister the device from push notifications.
#[tauri::command]
pub async fn unregister(state: State<'_, PluginState>) -> Result<String, Error> {
    Ok(state.sdk.unregister().await?)
}

/// Current push token, if registration has produced one.
#[tauri::command]
pub fn get_push_token(state: State<'_, PluginState>) -> Option<String> {
    state.sdk.push_token()
}

/// Hardware id used for communication with the vendor API.
#[tauri::command]
pub fn get_hwid(state: State<'_, PluginState>) -> String {
    state.sdk.hardware_id()
}
