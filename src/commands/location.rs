use tauri::State;

use crate::PluginState;

/// Start geolocation-based pushes; geozones are configured vendor-side.
#[tauri::command]
pub fn start_location_tracking(state: State<'_, PluginState>) {
    state.sdk.start_location_tracking();
}

#[tauri::command]
pub fn stop_location_tracking(state: State<'_, PluginState>) {
    state.sdk.stop_location_tracking();
}
