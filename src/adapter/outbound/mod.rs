//! Outbound adapters (driven side).

pub mod notifier;
pub mod source;
pub mod store;
