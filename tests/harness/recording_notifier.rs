use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use holdwatch::port::Notifier;

/// Thread-safe message collector for notification assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().expect("lock notifier messages").len()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("lock notifier messages").clone()
    }

    pub fn clear(&self) {
        self.messages.lock().expect("lock notifier messages").clear();
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, text: &str) {
        self.messages
            .lock()
            .expect("lock notifier messages")
            .push(text.to_string());
    }
}
