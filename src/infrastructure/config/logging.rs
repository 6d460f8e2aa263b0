//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// `pretty` or `json`.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "info".into()
}

fn default_format() -> String {
    "pretty".into()
}

impl LoggingConfig {
    /// Formats accepted by [`LoggingConfig::init`].
    pub const FORMATS: [&'static str; 2] = ["pretty", "json"];

    /// Apply command-line overrides.
    #[must_use]
    pub fn with_overrides(mut self, level: Option<&str>, json: bool) -> Self {
        if let Some(level) = level {
            self.level = level.to_string();
        }
        if json {
            self.format = "json".to_string();
        }
        self
    }

    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` takes precedence over the configured level. Returns `false`
    /// when a global subscriber was already installed; the existing one stays.
    pub fn init(&self) -> bool {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let installed = match self.format.as_str() {
            "json" => fmt().json().with_env_filter(filter).try_init(),
            _ => fmt().with_env_filter(filter).try_init(),
        };
        installed.is_ok()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}
