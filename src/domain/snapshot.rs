//! Persisted leaderboard snapshot.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entry::{Entry, Identity};

/// Position and value of one identity inside a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub rank: u32,
    #[serde(default, alias = "balance_eth")]
    pub quantity: f64,
    #[serde(default, alias = "readable")]
    pub display: String,
}

/// Last-known leaderboard, keyed by normalized identity.
///
/// Legacy documents using `timestamp`/`holders_map` keys load unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, alias = "timestamp", with = "chrono::serde::ts_seconds")]
    pub captured_at: DateTime<Utc>,
    #[serde(default, alias = "holders_map")]
    pub entries: HashMap<Identity, SnapshotRecord>,
}

impl Snapshot {
    /// Build a snapshot from an acquired leaderboard.
    #[must_use]
    pub fn from_entries(entries: &[Entry], captured_at: DateTime<Utc>) -> Self {
        let entries = entries
            .iter()
            .map(|e| {
                (
                    e.identity.clone(),
                    SnapshotRecord {
                        rank: e.rank,
                        quantity: e.quantity,
                        display: e.display.clone(),
                    },
                )
            })
            .collect();
        Self {
            captured_at,
            entries,
        }
    }

    /// Rebuild rank-sorted entries, e.g. to render a stored snapshot.
    #[must_use]
    pub fn to_entries(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self
            .entries
            .iter()
            .map(|(identity, record)| Entry {
                identity: identity.clone(),
                rank: record.rank,
                quantity: record.quantity,
                display: record.display.clone(),
                share: None,
                label: None,
            })
            .collect();
        entries.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.identity.cmp(&b.identity)));
        entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_legacy_document() {
        let json = r#"{
            "timestamp": 1700000000,
            "holders_map": {
                "0xabc": {"rank": 1, "balance_eth": 12.5, "readable": "12.5 ETH"}
            }
        }"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.captured_at.timestamp(), 1_700_000_000);
        let record = &snapshot.entries[&Identity::new("0xABC")];
        assert_eq!(record.rank, 1);
        assert_eq!(record.display, "12.5 ETH");
    }

    #[test]
    fn test_mixed_case_keys_load_canonical() {
        let json = r#"{
            "captured_at": 1700000000,
            "entries": {
                "0xABC": {"rank": 1, "quantity": 3.0, "display": "3 ETH"}
            }
        }"#;
        let stored: Snapshot = serde_json::from_str(json).unwrap();
        let fresh = Snapshot::from_entries(&[Entry::new("0xabc", 1, 3.0, "3 ETH")], Utc::now());

        assert!(stored.entries.contains_key(&Identity::new("0xabc")));
        assert!(crate::domain::diff(&stored.entries, &fresh.entries).is_empty());
    }

    #[test]
    fn test_missing_fields_default() {
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_to_entries_sorted_by_rank() {
        let entries = vec![
            Entry::new("0xb", 2, 5.0, "5"),
            Entry::new("0xa", 1, 9.0, "9"),
        ];
        let snapshot = Snapshot::from_entries(&entries, Utc::now());
        let back = snapshot.to_entries();
        assert_eq!(back[0].identity.as_str(), "0xa");
        assert_eq!(back[1].rank, 2);
    }
}
