//! Structured-page leaderboard source.
//!
//! Walks paginated HTML leaderboard pages, extracting the ranked table from
//! each and deduplicating identities across pages.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

use super::settings::PageSourceConfig;
use super::table::{parse_ranked_table, TableHeaders};
use crate::domain::Entry;
use crate::error::SourceError;
use crate::port::LeaderboardSource;

/// Outcome of fetching one page across its candidate URLs.
enum PageOutcome {
    Table(Vec<Entry>),
    NoTable,
    Failed(SourceError),
}

/// Primary source: scraped leaderboard pages.
pub struct PageSource {
    client: Client,
    config: PageSourceConfig,
    headers: TableHeaders,
}

impl PageSource {
    /// Create a page source with its own HTTP client.
    pub fn new(config: PageSourceConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let headers = TableHeaders {
            rank: config.rank_header.clone(),
            identity: config.identity_header.clone(),
        };
        Ok(Self {
            client,
            config,
            headers,
        })
    }

    async fn fetch_page(&self, page: usize) -> PageOutcome {
        let mut last_error = None;
        let mut fetched = false;

        for template in &self.config.urls {
            let url = template.replace("{page}", &page.to_string());
            debug!(url = %url, "Requesting leaderboard page");

            let response = match self.client.get(&url).send().await {
                Ok(response) => response,
                Err(e) => {
                    debug!(url = %url, error = %e, "Page request failed");
                    last_error = Some(SourceError::Http(e));
                    continue;
                }
            };

            let status = response.status();
            if status != StatusCode::OK {
                let body = response.text().await.unwrap_or_default();
                debug!(url = %url, status = status.as_u16(), "Unexpected page status");
                last_error = Some(SourceError::Status {
                    status: status.as_u16(),
                    body: truncate(&body, 200),
                });
                continue;
            }

            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    last_error = Some(SourceError::Http(e));
                    continue;
                }
            };
            fetched = true;

            if let Some(entries) = parse_ranked_table(&body, &self.headers) {
                debug!(url = %url, rows = entries.len(), "Parsed leaderboard table");
                return PageOutcome::Table(entries);
            }
            debug!(url = %url, "No ranked table on page");
        }

        match last_error {
            Some(e) if !fetched => PageOutcome::Failed(e),
            _ => PageOutcome::NoTable,
        }
    }
}

#[async_trait]
impl LeaderboardSource for PageSource {
    /// Walk pages until `limit` unique entries are collected.
    ///
    /// Every page visited must yield a table: a page that cannot be fetched
    /// fails the fetch with its error, a page without a table with
    /// `NotFound`.
    async fn fetch_top(&self, limit: usize) -> Result<Vec<Entry>, SourceError> {
        let mut collected: Vec<Entry> = Vec::with_capacity(limit);
        let mut seen = HashSet::new();

        for page in 1..=self.config.max_pages {
            if collected.len() >= limit {
                break;
            }
            if page > 1 && self.config.page_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.config.page_delay_ms)).await;
            }

            let entries = match self.fetch_page(page).await {
                PageOutcome::Table(entries) => entries,
                PageOutcome::NoTable => {
                    warn!(page, "No ranked table on leaderboard page");
                    return Err(SourceError::NotFound);
                }
                PageOutcome::Failed(e) => {
                    warn!(page, error = %e, "Leaderboard page unavailable");
                    return Err(e);
                }
            };

            for entry in entries {
                if collected.len() >= limit {
                    break;
                }
                if seen.insert(entry.identity.clone()) {
                    collected.push(entry);
                }
            }
        }

        info!(entries = collected.len(), "Fetched leaderboard pages");
        Ok(collected)
    }

    fn name(&self) -> &'static str {
        "page"
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
