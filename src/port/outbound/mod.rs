//! Outbound ports: the system calls these to reach external collaborators.

pub mod notifier;
pub mod source;
pub mod store;
