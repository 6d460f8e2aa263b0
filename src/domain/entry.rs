//! Canonical leaderboard entry.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Normalized identity key - newtype for type safety.
///
/// Construction always case-folds and trims, so two identities compare equal
/// exactly when their canonical forms match. Deserialization normalizes too,
/// so keys read back from a stored snapshot are canonical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity(String);

impl Identity {
    /// Normalize a raw identity as returned by a source.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(normalize_identity(raw.as_ref()))
    }

    /// Get the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Identity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Identity {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Canonical form of a raw identity. Idempotent.
#[must_use]
pub fn normalize_identity(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// One ranked item at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub identity: Identity,
    /// 1-based position, unique within a snapshot.
    pub rank: u32,
    pub quantity: f64,
    /// Source-provided rendering of `quantity`.
    pub display: String,
    /// Advisory percentage of the total supply.
    pub share: Option<f64>,
    /// Known-entity annotation such as an exchange name.
    pub label: Option<String>,
}

impl Entry {
    /// Build an entry from raw source data, normalizing the identity.
    pub fn new(raw_identity: &str, rank: u32, quantity: f64, display: impl Into<String>) -> Self {
        Self {
            identity: Identity::new(raw_identity),
            rank,
            quantity,
            display: display.into(),
            share: None,
            label: None,
        }
    }

    #[must_use]
    pub fn with_share(mut self, share: Option<f64>) -> Self {
        self.share = share;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: Option<String>) -> Self {
        self.label = label.filter(|l| !l.trim().is_empty());
        self
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for Entry {}
