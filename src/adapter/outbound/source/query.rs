//! Query-API leaderboard source (GraphQL).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use super::settings::QuerySourceConfig;
use crate::domain::Entry;
use crate::error::SourceError;
use crate::port::LeaderboardSource;

const TOP_BALANCES_QUERY: &str = r#"
query ($network: EthereumNetwork!, $limit: Int!) {
  ethereum(network: $network) {
    balances(options: {desc: "balance", limit: $limit}) {
      address { address }
      balance
    }
  }
}
"#;

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    data: Option<QueryData>,
    #[serde(default)]
    errors: Vec<QueryErrorItem>,
}

#[derive(Debug, Deserialize)]
struct QueryData {
    #[serde(default)]
    ethereum: Option<NetworkData>,
}

#[derive(Debug, Deserialize)]
struct NetworkData {
    #[serde(default)]
    balances: Vec<BalanceItem>,
}

#[derive(Debug, Deserialize)]
struct BalanceItem {
    #[serde(default)]
    address: Option<AddressItem>,
    #[serde(default)]
    balance: f64,
}

#[derive(Debug, Deserialize)]
struct AddressItem {
    #[serde(default)]
    address: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QueryErrorItem {
    #[serde(default)]
    message: String,
}

/// Backup source: a single sorted query against a balance API.
pub struct QuerySource {
    client: Client,
    config: QuerySourceConfig,
}

impl QuerySource {
    pub fn new(config: QuerySourceConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    fn to_entries(&self, response: QueryResponse) -> Result<Vec<Entry>, SourceError> {
        if !response.errors.is_empty() {
            let messages: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
            return Err(SourceError::Provider(messages.join("; ")));
        }

        let balances = response
            .data
            .and_then(|d| d.ethereum)
            .map(|n| n.balances)
            .ok_or_else(|| SourceError::Decode("missing data.ethereum.balances".into()))?;

        let entries = balances
            .into_iter()
            .filter_map(|item| {
                let address = item.address.and_then(|a| a.address)?;
                Some((address, item.balance))
            })
            .filter(|(address, _)| !address.trim().is_empty())
            .zip(1u32..)
            .map(|((address, balance), rank)| {
                Entry::new(&address, rank, balance, format!("{balance} {}", self.config.unit))
            })
            .collect();
        Ok(entries)
    }
}

#[async_trait]
impl LeaderboardSource for QuerySource {
    async fn fetch_top(&self, limit: usize) -> Result<Vec<Entry>, SourceError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(SourceError::Unconfigured)?;

        debug!(url = %self.config.url, limit, "Querying balance API");

        let body = json!({
            "query": TOP_BALANCES_QUERY,
            "variables": { "network": self.config.network, "limit": limit },
        });

        let response: QueryResponse = self
            .client
            .post(&self.config.url)
            .header("X-API-KEY", api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let entries = self.to_entries(response)?;
        info!(entries = entries.len(), "Fetched leaderboard from balance API");
        Ok(entries)
    }

    fn name(&self) -> &'static str {
        "query"
    }

    fn is_configured(&self) -> bool {
        self.config.has_credential()
    }
}
