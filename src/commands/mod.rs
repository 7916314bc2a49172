//! Tauri command handlers (IPC entry points).
//!
//! Every command is a stateless pass-through: validate arguments, call the
//! vendor SDK or the delivery coordinator, map the outcome onto the invoke
//! result. No command retries or caches.

pub mod badge;
pub mod events;
pub mod location;
pub mod notifications;
pub mod registration;
pub mod tags;
