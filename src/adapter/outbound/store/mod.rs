//! Snapshot store adapters.

mod json;

pub use json::JsonSnapshotStore;
