//! Cold-start buffering and delivery ordering for native push events.
//!
//! Native push callbacks can fire before the frontend has attached any
//! listener. The coordinator guarantees such a payload is never lost, is
//! delivered exactly once to the first subscriber of its kind, and is also
//! broadcast on the application event stream once a session is attached.

mod coordinator;
mod slot;

#[cfg(test)]
mod tests;

pub use coordinator::{DeliveryCoordinator, DrainMode, DrainedEvents, EventSink};

use crate::bus::event_names;

/// The two push event kinds the bridge delivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushKind {
    Opened,
    Received,
}

impl PushKind {
    /// Internal bus key used for in-process callback fan-out.
    pub(crate) fn bus_key(self) -> &'static str {
        match self {
            PushKind::Opened => event_names::PUSH_OPENED_EVENT,
            PushKind::Received => event_names::PUSH_RECEIVED_EVENT,
        }
    }

    /// Public name used on the application event stream.
    pub(crate) fn stream_event(self) -> &'static str {
        match self {
            PushKind::Opened => event_names::PUSH_OPENED_STREAM_EVENT,
            PushKind::Received => event_names::PUSH_RECEIVED_STREAM_EVENT,
        }
    }
}

impl std::fmt::Display for PushKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PushKind::Opened => write!(f, "opened"),
            PushKind::Received => write!(f, "received"),
        }
    }
}
