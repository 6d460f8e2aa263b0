//! Telegram delivery of leaderboard reports.

mod notifier;

pub use notifier::{TelegramConfig, TelegramNotifier};
