use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use holdwatch::domain::Entry;
use holdwatch::error::SourceError;
use holdwatch::port::LeaderboardSource;

/// Deterministic leaderboard source. Replays scripted results in order;
/// an exhausted script yields `NotFound`.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    results: Arc<Mutex<VecDeque<Result<Vec<Entry>, SourceError>>>>,
    calls: Arc<AtomicUsize>,
    unconfigured: bool,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source that reports itself as lacking credentials.
    pub fn unconfigured() -> Self {
        Self {
            unconfigured: true,
            ..Self::default()
        }
    }

    pub fn push_ok(&self, entries: Vec<Entry>) -> &Self {
        self.results
            .lock()
            .expect("lock scripted results")
            .push_back(Ok(entries));
        self
    }

    pub fn push_err(&self, error: SourceError) -> &Self {
        self.results
            .lock()
            .expect("lock scripted results")
            .push_back(Err(error));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LeaderboardSource for ScriptedSource {
    async fn fetch_top(&self, _limit: usize) -> Result<Vec<Entry>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.results
            .lock()
            .expect("lock scripted results")
            .pop_front()
            .unwrap_or(Err(SourceError::NotFound))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }

    fn is_configured(&self) -> bool {
        !self.unconfigured
    }
}
