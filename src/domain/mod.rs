//! Source-agnostic leaderboard model and change detection.

mod diff;
mod entry;
mod snapshot;

pub use diff::{diff, DiffResult, Entrant, Exit, RankChange};
pub use entry::{normalize_identity, Entry, Identity};
pub use snapshot::{Snapshot, SnapshotRecord};
