//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for delivery backends. The logging
//! and no-op notifiers live next to the port.

#[cfg(feature = "telegram")]
pub mod telegram;
