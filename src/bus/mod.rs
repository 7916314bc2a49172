//! In-process event fan-out for native push callbacks.
//!
//! The event bus provides:
//! - Publish-subscribe keyed by event name
//! - Ordered dispatch to every subscriber of a key
//! - Per-subscriber panic isolation so one bad callback cannot starve the rest
//!
//! # Architecture
//!
//! Subscriptions are append-only and live for the process lifetime. The
//! delivery coordinator owns the bus and performs all registration under its
//! own lock; the bus only needs to protect its subscriber lists against
//! concurrent appends.

mod event_bus;
pub mod event_names;

pub use event_bus::{EventBus, EventCallback};
