use tauri::State;

use crate::sdk::{SoundType, VibrateType};
use crate::{Error, PluginState};

/// Allow multiple notifications to stack in the notification center.
#[tauri::command]
pub fn set_multi_notification_mode(state: State<'_, PluginState>, enabled: bool) {
    state.sdk.set_multi_notification_mode(enabled);
}

/// Turn the screen on when a notification arrives.
#[tauri::command]
pub fn set_light_screen_on_notification(state: State<'_, PluginState>, enabled: bool) {
    state.sdk.set_light_screen_on_notification(enabled);
}

/// Blink the LED when a notification arrives while the display is off.
#[tauri::command]
pub fn set_enable_led(state: State<'_, PluginState>, enabled: bool) {
    state.sdk.set_enable_led(enabled);
}

/// LED color in ARGB integer format; use together with `set_enable_led`.
#[tauri::command]
pub fn set_color_led(state: State<'_, PluginState>, color: u32) {
    state.sdk.set_color_led(color);
}

#[tauri::command]
pub fn set_sound_type(state: State<'_, PluginState>, sound_type: u8) -> Result<(), Error> {
    let sound = SoundType::try_from(sound_type).map_err(Error::Config)?;
    state.sdk.set_sound_type(sound);
    Ok(())
}

#[tauri::command]
pub fn set_vibrate_type(state: State<'_, PluginState>, vibrate_type: u8) -> Result<(), Error> {
    let vibrate = VibrateType::try_from(vibrate_type).map_err(Error::Config)?;
    state.sdk.set_vibrate_type(vibrate);
    Ok(())
}

/// Show an alert when a push arrives while the app is in the foreground.
#[tauri::command]
pub fn set_show_notification_alert(state: State<'_, PluginState>, enabled: bool) {
    state.sdk.set_show_notification_alert(enabled);
}

#[tauri::command]
pub fn get_show_notification_alert(state: State<'_, PluginState>) -> bool {
    state.sdk.show_notification_alert()
}
