/// Receive-event name defined by the vendor SDK. Reused by the bridge as the
/// internal bus key for received pushes.
pub const PUSH_RECEIVE_EVENT: &str = "push-receive-event";

#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    #[error("{operation} is not supported on this platform")]
    Unsupported { operation: &'static str },
    #[error("{0}")]
    Vendor(String),
}

/// Sound played when a push arrives (wire values 0 default, 1 none,
/// 2 always).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundType {
    Default,
    NoSound,
    Always,
}

impl TryFrom<u8> for SoundType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SoundType::Default),
            1 => Ok(SoundType::NoSound),
            2 => Ok(SoundType::Always),
            other => Err(format!("invalid sound type: {other} (expected 0, 1 or 2)")),
        }
    }
}

/// Vibration behavior when a push arrives (wire values 0 default, 1 none,
/// 2 always).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VibrateType {
    Default,
    NoVibrate,
    Always,
}

impl TryFrom<u8> for VibrateType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(VibrateType::Default),
            1 => Ok(VibrateType::NoVibrate),
            2 => Ok(VibrateType::Always),
            other => Err(format!("invalid vibrate type: {other} (expected 0, 1 or 2)")),
        }
    }
}
