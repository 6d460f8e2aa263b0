//! Telegram notification configuration.

use serde::Deserialize;

/// Telegram notification configuration.
///
/// Credentials are loaded from `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`
/// at runtime (never from the config file).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramAppConfig {
    /// Enable telegram notifications.
    #[serde(default)]
    pub enabled: bool,
    #[serde(skip)]
    pub bot_token: Option<String>,
    #[serde(skip)]
    pub chat_id: Option<String>,
}

impl TelegramAppConfig {
    /// Chat id parsed as a Telegram numeric id.
    #[must_use]
    pub fn parsed_chat_id(&self) -> Option<i64> {
        self.chat_id.as_deref().and_then(|id| id.trim().parse().ok())
    }
}
