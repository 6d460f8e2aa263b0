//! Leaderboard source configuration.

use serde::Deserialize;

/// Configuration for both source tiers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourcesConfig {
    /// Primary, HTML leaderboard pages.
    #[serde(default)]
    pub page: PageSourceConfig,
    /// Backup, GraphQL query API.
    #[serde(default)]
    pub query: QuerySourceConfig,
}

/// Structured-page source settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PageSourceConfig {
    /// URL templates; `{page}` is replaced by the 1-based page number.
    /// Tried in order until one yields a ranked table.
    #[serde(default = "default_page_urls")]
    pub urls: Vec<String>,
    /// Maximum number of pages fetched per cycle.
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_page_timeout_secs")]
    pub timeout_secs: u64,
    /// Pause between page requests in milliseconds.
    #[serde(default = "default_page_delay_ms")]
    pub page_delay_ms: u64,
    /// Header text identifying the rank column.
    #[serde(default = "default_rank_header")]
    pub rank_header: String,
    /// Header text identifying the identity column.
    #[serde(default = "default_identity_header")]
    pub identity_header: String,
}

fn default_page_urls() -> Vec<String> {
    vec![
        "https://etherscan.io/accounts/{page}".to_string(),
        "https://etherscan.io/accounts?page={page}".to_string(),
    ]
}

const fn default_max_pages() -> usize {
    4
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; holdwatch/0.1)".to_string()
}

const fn default_page_timeout_secs() -> u64 {
    20
}

const fn default_page_delay_ms() -> u64 {
    1000
}

fn default_rank_header() -> String {
    "rank".to_string()
}

fn default_identity_header() -> String {
    "address".to_string()
}

impl Default for PageSourceConfig {
    fn default() -> Self {
        Self {
            urls: default_page_urls(),
            max_pages: default_max_pages(),
            user_agent: default_user_agent(),
            timeout_secs: default_page_timeout_secs(),
            page_delay_ms: default_page_delay_ms(),
            rank_header: default_rank_header(),
            identity_header: default_identity_header(),
        }
    }
}

/// Query-API source settings.
///
/// The API key is loaded from `BITQUERY_API_KEY` at runtime (never from the
/// config file).
#[derive(Debug, Clone, Deserialize)]
pub struct QuerySourceConfig {
    #[serde(default = "default_query_url")]
    pub url: String,
    #[serde(default = "default_network")]
    pub network: String,
    /// Unit appended to the rendered quantity.
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default = "default_query_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_query_url() -> String {
    "https://graphql.bitquery.io".to_string()
}

fn default_network() -> String {
    "ethereum".to_string()
}

fn default_unit() -> String {
    "ETH".to_string()
}

const fn default_query_timeout_secs() -> u64 {
    30
}

impl Default for QuerySourceConfig {
    fn default() -> Self {
        Self {
            url: default_query_url(),
            network: default_network(),
            unit: default_unit(),
            timeout_secs: default_query_timeout_secs(),
            api_key: None,
        }
    }
}

impl QuerySourceConfig {
    /// True when a non-blank API key is present.
    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}
