//! Monitoring cycle configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// Cycle cadence, leaderboard size and report limits.
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorConfig {
    /// Seconds between cycle starts.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Send the full listing every N successful cycles; 0 disables it.
    #[serde(default = "default_full_listing_every")]
    pub full_listing_every: u64,
    /// Location of the persisted snapshot.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,
    /// Leaderboard size.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Smallest result accepted from a source.
    #[serde(default = "default_min_plausible")]
    pub min_plausible: usize,
    /// Maximum characters per outbound message.
    #[serde(default = "default_max_message_len")]
    pub max_message_len: usize,
    /// Name of the tracked quantity shown in report headers.
    #[serde(default = "default_title")]
    pub title: String,
}

const fn default_poll_interval_secs() -> u64 {
    600
}

const fn default_full_listing_every() -> u64 {
    144
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("top100_snapshot.json")
}

const fn default_top_n() -> usize {
    100
}

const fn default_min_plausible() -> usize {
    10
}

const fn default_max_message_len() -> usize {
    3800
}

fn default_title() -> String {
    "ETH".to_string()
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            full_listing_every: default_full_listing_every(),
            snapshot_path: default_snapshot_path(),
            top_n: default_top_n(),
            min_plausible: default_min_plausible(),
            max_message_len: default_max_message_len(),
            title: default_title(),
        }
    }
}
