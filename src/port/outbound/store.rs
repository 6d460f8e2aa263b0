//! Snapshot persistence port.

use crate::domain::Snapshot;
use crate::error::StoreError;

/// Holds exactly one logical snapshot.
pub trait SnapshotStore: Send + Sync {
    /// Load the last saved snapshot.
    ///
    /// Never fails: a missing or unreadable document yields an empty
    /// snapshot.
    fn load(&self) -> Snapshot;

    /// Replace the stored snapshot as a whole.
    ///
    /// On error the previously stored snapshot stays intact.
    fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError>;
}
