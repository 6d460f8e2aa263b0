//! Leaderboard source port.

use async_trait::async_trait;

use crate::domain::Entry;
use crate::error::SourceError;

/// Retrieves a ranked list from one upstream.
///
/// Implementations normalize identities when building [`Entry`] values and
/// return entries in ascending rank order. Any problem, including an
/// upstream that cannot be reached or parsed, is a [`SourceError`].
#[async_trait]
pub trait LeaderboardSource: Send + Sync {
    /// Fetch at most `limit` top entries.
    async fn fetch_top(&self, limit: usize) -> Result<Vec<Entry>, SourceError>;

    /// Short name for logs and reports.
    fn name(&self) -> &'static str;

    /// Whether the source has everything it needs to be attempted.
    fn is_configured(&self) -> bool {
        true
    }
}
