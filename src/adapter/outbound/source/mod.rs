//! Leaderboard source adapters.
//!
//! The set of sources is closed: [`Source`] enumerates them and dispatches
//! to the variant, while the acquisition orchestrator picks them by an
//! explicit priority (page first, query as backup).

mod page;
mod query;
pub mod settings;
mod table;

use async_trait::async_trait;

pub use page::PageSource;
pub use query::QuerySource;
pub use settings::{PageSourceConfig, QuerySourceConfig, SourcesConfig};
pub use table::{parse_ranked_table, TableHeaders};

use crate::domain::Entry;
use crate::error::SourceError;
use crate::port::LeaderboardSource;

/// One of the supported upstream leaderboards.
pub enum Source {
    Page(PageSource),
    Query(QuerySource),
}

#[async_trait]
impl LeaderboardSource for Source {
    async fn fetch_top(&self, limit: usize) -> Result<Vec<Entry>, SourceError> {
        match self {
            Self::Page(source) => source.fetch_top(limit).await,
            Self::Query(source) => source.fetch_top(limit).await,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Page(source) => source.name(),
            Self::Query(source) => source.name(),
        }
    }

    fn is_configured(&self) -> bool {
        match self {
            Self::Page(source) => source.is_configured(),
            Self::Query(source) => source.is_configured(),
        }
    }
}
