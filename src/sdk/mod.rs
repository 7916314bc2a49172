//! Vendor push SDK boundary.
//!
//! The bridge never talks to a concrete push SDK directly; everything goes
//! through the [`PushSdk`] trait so each target platform can plug in its own
//! implementation. [`UnsupportedSdk`] is the fallback for platforms without
//! one.

mod traits;
mod types;
mod unsupported;

pub use traits::{DeliveryHandler, PushSdk};
pub use types::{SdkError, SoundType, VibrateType, PUSH_RECEIVE_EVENT};
pub use unsupported::UnsupportedSdk;
