//! Telegram notifier.
//!
//! Sends pre-chunked HTML report blocks to a single chat. Requires the
//! `telegram` feature to be enabled.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::{debug, error, info};

use crate::port::Notifier;

/// Connection settings for the Telegram notifier.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Target chat ID for reports.
    pub chat_id: i64,
}

/// Telegram notifier that sends messages to one chat.
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(config: &TelegramConfig) -> Self {
        info!(chat_id = config.chat_id, "Telegram notifier configured");
        Self {
            bot: Bot::new(&config.bot_token),
            chat_id: ChatId(config.chat_id),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) {
        match self
            .bot
            .send_message(self.chat_id, text)
            .parse_mode(ParseMode::Html)
            .await
        {
            Ok(_) => debug!(chars = text.chars().count(), "Telegram message sent"),
            Err(e) => error!(error = %e, "Failed to send Telegram message"),
        }
    }
}
