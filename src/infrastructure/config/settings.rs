//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for secrets (`TELEGRAM_BOT_TOKEN`, `TELEGRAM_CHAT_ID`, `BITQUERY_API_KEY`).
//!
//! # Example
//!
//! ```no_run
//! use holdwatch::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.logging.init();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use super::monitor::MonitorConfig;
use super::telegram::TelegramAppConfig;
use crate::adapter::outbound::source::SourcesConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Cycle cadence and leaderboard limits.
    #[serde(default)]
    pub monitor: MonitorConfig,

    /// Upstream leaderboard sources.
    #[serde(default)]
    pub source: SourcesConfig,

    /// Telegram notification configuration.
    #[serde(default)]
    pub telegram: TelegramAppConfig,
}

/// Read an environment variable, treating blank values as absent.
fn env_secret(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Secrets are read from the environment, then the result is validated.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        config.source.query.api_key = env_secret("BITQUERY_API_KEY");
        config.telegram.bot_token = env_secret("TELEGRAM_BOT_TOKEN");
        config.telegram.chat_id = env_secret("TELEGRAM_CHAT_ID");

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Check that values are present and within acceptable ranges.
    pub fn validate(&self) -> Result<()> {
        let monitor = &self.monitor;
        if monitor.poll_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "poll_interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if monitor.top_n == 0 {
            return Err(ConfigError::InvalidValue {
                field: "top_n",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if monitor.min_plausible > monitor.top_n {
            return Err(ConfigError::InvalidValue {
                field: "min_plausible",
                reason: format!("must not exceed top_n ({})", monitor.top_n),
            }
            .into());
        }
        if monitor.max_message_len == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_message_len",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if monitor.snapshot_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "snapshot_path",
            }
            .into());
        }

        let page = &self.source.page;
        if page.urls.iter().all(|u| u.trim().is_empty()) {
            return Err(ConfigError::MissingField { field: "urls" }.into());
        }
        if page.max_pages == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_pages",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.source.query.url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "url" }.into());
        }

        if !LoggingConfig::FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected one of {:?}", LoggingConfig::FORMATS),
            }
            .into());
        }

        if self.telegram.enabled {
            if self.telegram.bot_token.is_none() {
                return Err(ConfigError::MissingField {
                    field: "TELEGRAM_BOT_TOKEN",
                }
                .into());
            }
            if self.telegram.chat_id.is_none() {
                return Err(ConfigError::MissingField {
                    field: "TELEGRAM_CHAT_ID",
                }
                .into());
            }
            if self.telegram.parsed_chat_id().is_none() {
                return Err(ConfigError::InvalidValue {
                    field: "TELEGRAM_CHAT_ID",
                    reason: "must be a numeric chat id".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}
