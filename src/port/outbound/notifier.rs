//! Notifier port for operator-facing messages.

use async_trait::async_trait;
use tracing::info;

/// Best-effort text delivery.
///
/// # Implementation Notes
///
/// - Callers pre-chunk text to the transport's maximum message size
/// - `send` never fails the caller; delivery errors are logged
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one message block.
    async fn send(&self, text: &str);
}

/// A logging notifier that writes each block via tracing.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, text: &str) {
        info!(chars = text.chars().count(), "\n{text}");
    }
}

/// A no-op notifier for tests or dry runs.
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn send(&self, _text: &str) {}
}
