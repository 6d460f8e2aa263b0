//! Two-tier leaderboard acquisition.
//!
//! The primary source is tried first. Any failure, including a result that
//! is too small to be a whole leaderboard, falls through to the backup
//! source once, if one is configured. Nothing is retried within a cycle.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::domain::Entry;
use crate::error::{AcquisitionError, SourceError};
use crate::port::LeaderboardSource;

/// Limits applied to every acquired leaderboard.
#[derive(Debug, Clone, Copy)]
pub struct AcquisitionSettings {
    /// Entries kept from the top of the leaderboard.
    pub top_n: usize,
    /// Results with fewer entries are rejected as implausible.
    pub min_plausible: usize,
}

impl Default for AcquisitionSettings {
    fn default() -> Self {
        Self {
            top_n: 100,
            min_plausible: 10,
        }
    }
}

/// Reject results too small to be trusted as a complete leaderboard.
pub fn ensure_plausible(entries: &[Entry], min: usize) -> Result<(), SourceError> {
    if entries.len() < min {
        return Err(SourceError::Implausible {
            count: entries.len(),
            min,
        });
    }
    Ok(())
}

/// Sort by rank, drop repeated identities (best rank wins), drop repeated
/// ranks (first row wins) and truncate.
///
/// Ranks are unique in the result.
#[must_use]
pub fn canonicalize(mut entries: Vec<Entry>, top_n: usize) -> Vec<Entry> {
    entries.sort_by_key(|e| e.rank);
    let mut seen = HashSet::with_capacity(entries.len());
    entries.retain(|e| seen.insert(e.identity.clone()));

    let before = entries.len();
    let mut ranks = HashSet::with_capacity(entries.len());
    entries.retain(|e| ranks.insert(e.rank));
    if entries.len() < before {
        warn!(dropped = before - entries.len(), "Dropped entries with duplicate ranks");
    }

    entries.truncate(top_n);
    entries
}

/// Tries the primary source, then the backup.
pub struct SourceOrchestrator<P, B = P> {
    primary: P,
    backup: Option<B>,
    settings: AcquisitionSettings,
}

impl<P, B> SourceOrchestrator<P, B>
where
    P: LeaderboardSource,
    B: LeaderboardSource,
{
    pub fn new(primary: P, backup: Option<B>, settings: AcquisitionSettings) -> Self {
        Self {
            primary,
            backup,
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> AcquisitionSettings {
        self.settings
    }

    /// Whether a usable backup tier exists.
    #[must_use]
    pub fn has_backup(&self) -> bool {
        self.backup.as_ref().is_some_and(|b| b.is_configured())
    }

    /// Acquire a rank-sorted leaderboard of at most `top_n` entries.
    pub async fn acquire(&self) -> Result<Vec<Entry>, AcquisitionError> {
        let primary = match self.attempt(&self.primary).await {
            Ok(entries) => return Ok(entries),
            Err(e) => e,
        };
        warn!(source = self.primary.name(), error = %primary, "Primary source failed");

        let Some(backup) = self.backup.as_ref().filter(|b| b.is_configured()) else {
            return Err(AcquisitionError::PrimaryFailed { primary });
        };

        info!(source = backup.name(), "Trying backup source");
        match self.attempt(backup).await {
            Ok(entries) => Ok(entries),
            Err(backup_err) => {
                warn!(source = backup.name(), error = %backup_err, "Backup source failed");
                Err(AcquisitionError::Exhausted {
                    primary,
                    backup: backup_err,
                })
            }
        }
    }

    async fn attempt<S: LeaderboardSource>(&self, source: &S) -> Result<Vec<Entry>, SourceError> {
        let fetched = source.fetch_top(self.settings.top_n).await?;
        let entries = canonicalize(fetched, self.settings.top_n);
        ensure_plausible(&entries, self.settings.min_plausible)?;
        info!(source = source.name(), entries = entries.len(), "Leaderboard acquired");
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(ids: &[(&str, u32)]) -> Vec<Entry> {
        ids.iter()
            .map(|(id, rank)| Entry::new(id, *rank, 1.0, "1"))
            .collect()
    }

    #[test]
    fn test_canonicalize_sorts_dedups_truncates() {
        let raw = entries(&[("c", 3), ("A", 1), ("a", 4), ("b", 2)]);
        let out = canonicalize(raw, 2);
        let ids: Vec<_> = out.iter().map(|e| (e.identity.as_str(), e.rank)).collect();
        assert_eq!(ids, vec![("a", 1), ("b", 2)]);
    }

    #[test]
    fn test_canonicalize_keeps_ranks_unique() {
        let raw = entries(&[("a", 1), ("b", 2), ("c", 1), ("d", 2), ("e", 3)]);
        let out = canonicalize(raw, 100);
        let ranks: Vec<u32> = out.iter().map(|e| e.rank).collect();
        let ids: Vec<_> = out.iter().map(|e| e.identity.as_str()).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(ids, vec!["a", "b", "e"]);
    }

    #[test]
    fn test_ensure_plausible() {
        let five = entries(&[("a", 1), ("b", 2), ("c", 3), ("d", 4), ("e", 5)]);
        assert!(matches!(
            ensure_plausible(&five, 10),
            Err(SourceError::Implausible { count: 5, min: 10 })
        ));
        assert!(ensure_plausible(&five, 5).is_ok());
    }
}
