//! Positional and membership diff between two snapshots.
//!
//! Only ranks are compared. A change in quantity at an unchanged rank is not
//! a change.

use std::collections::HashMap;

use super::entry::Identity;
use super::snapshot::SnapshotRecord;

/// Identity present in both snapshots at different ranks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankChange {
    pub identity: Identity,
    pub old_rank: u32,
    pub new_rank: u32,
}

impl RankChange {
    /// `old_rank - new_rank`: positive when the identity moved up.
    #[must_use]
    pub fn delta(&self) -> i64 {
        i64::from(self.old_rank) - i64::from(self.new_rank)
    }

    #[must_use]
    pub fn moved_up(&self) -> bool {
        self.new_rank < self.old_rank
    }
}

/// Identity that joined the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entrant {
    pub identity: Identity,
    pub new_rank: u32,
}

/// Identity that dropped off the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    pub identity: Identity,
    pub old_rank: u32,
}

/// Changes between two snapshots, in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Ascending by `old_rank - new_rank`, ties by new rank then identity.
    pub rank_changes: Vec<RankChange>,
    /// Ascending by new rank.
    pub entrants: Vec<Entrant>,
    /// Ascending by old rank.
    pub exits: Vec<Exit>,
}

impl DiffResult {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rank_changes.is_empty() && self.entrants.is_empty() && self.exits.is_empty()
    }

    #[must_use]
    pub fn change_count(&self) -> usize {
        self.rank_changes.len() + self.entrants.len() + self.exits.len()
    }
}

/// Compute the diff from `old` to `new`.
///
/// An empty `old` map is the first run: the new snapshot becomes the
/// baseline and nothing is reported.
#[must_use]
pub fn diff(
    old: &HashMap<Identity, SnapshotRecord>,
    new: &HashMap<Identity, SnapshotRecord>,
) -> DiffResult {
    if old.is_empty() {
        return DiffResult::default();
    }

    let mut result = DiffResult::default();

    for (identity, record) in new {
        match old.get(identity) {
            Some(previous) if previous.rank != record.rank => {
                result.rank_changes.push(RankChange {
                    identity: identity.clone(),
                    old_rank: previous.rank,
                    new_rank: record.rank,
                });
            }
            Some(_) => {}
            None => result.entrants.push(Entrant {
                identity: identity.clone(),
                new_rank: record.rank,
            }),
        }
    }

    for (identity, record) in old {
        if !new.contains_key(identity) {
            result.exits.push(Exit {
                identity: identity.clone(),
                old_rank: record.rank,
            });
        }
    }

    result.rank_changes.sort_by(|a, b| {
        a.delta()
            .cmp(&b.delta())
            .then_with(|| a.new_rank.cmp(&b.new_rank))
            .then_with(|| a.identity.cmp(&b.identity))
    });
    result
        .entrants
        .sort_by(|a, b| a.new_rank.cmp(&b.new_rank).then_with(|| a.identity.cmp(&b.identity)));
    result
        .exits
        .sort_by(|a, b| a.old_rank.cmp(&b.old_rank).then_with(|| a.identity.cmp(&b.identity)));

    result
}
