use tauri::State;

use crate::PluginState;

#[tauri::command]
pub fn set_application_icon_badge_number(state: State<'_, PluginState>, badge_number: i32) {
    state.sdk.set_badge_number(badge_number);
}

#[tauri::command]
pub fn get_application_icon_badge_number(state: State<'_, PluginState>) -> i32 {
    state.sdk.badge_number()
}

/// Adjust the badge by a signed delta.
#[tauri::command]
pub fn add_to_application_icon_badge_number(state: State<'_, PluginState>, badge_number: i32) {
    state.sdk.add_badge_number(badge_number);
}
