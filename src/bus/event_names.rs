//! Event name constants for push delivery.
//!
//! Single source of truth for the two push kinds' names. Each kind has an
//! internal bus key (in-process callback fan-out) and a public name (emission
//! on the application event stream). The received kind reuses the vendor
//! SDK's receive-event name as its internal key.

use crate::sdk::PUSH_RECEIVE_EVENT;

// ---------------------------------------------------------------------------
// Internal bus keys
// ---------------------------------------------------------------------------

pub const PUSH_OPENED_EVENT: &str = "pushbridge://push-opened";
pub const PUSH_RECEIVED_EVENT: &str = PUSH_RECEIVE_EVENT;

// ---------------------------------------------------------------------------
// Public event-stream names
// ---------------------------------------------------------------------------

pub const PUSH_OPENED_STREAM_EVENT: &str = "pushOpened";
pub const PUSH_RECEIVED_STREAM_EVENT: &str = "pushReceived";
