//! One acquire → diff → report → persist cycle.

use std::fmt::Display;

use chrono::Utc;
use tracing::{error, info, warn};

use super::acquisition::SourceOrchestrator;
use super::report::ReportFormatter;
use crate::domain::{diff, DiffResult, Snapshot};
use crate::port::{LeaderboardSource, Notifier, SnapshotStore};

/// State carried from one cycle to the next.
#[derive(Debug, Clone, Default)]
pub struct CycleState {
    /// Successfully completed cycles.
    pub polls_done: u64,
}

/// What a cycle observed.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// No previous snapshot; the new one was stored silently.
    Baseline { entries: usize },
    /// Same membership and ranks as before.
    Unchanged { entries: usize },
    /// Entrants, exits or rank shifts were reported.
    Changed { diff: DiffResult },
    /// Nothing was stored; the failure was reported.
    Failed { reason: String },
}

/// Owns the collaborators of a cycle.
pub struct Monitor<P, B = P> {
    orchestrator: SourceOrchestrator<P, B>,
    store: Box<dyn SnapshotStore>,
    notifier: Box<dyn Notifier>,
    formatter: ReportFormatter,
    /// Send the full listing every this many successful cycles; 0 disables.
    full_listing_every: u64,
}

impl<P, B> Monitor<P, B>
where
    P: LeaderboardSource,
    B: LeaderboardSource,
{
    pub fn new(
        orchestrator: SourceOrchestrator<P, B>,
        store: Box<dyn SnapshotStore>,
        notifier: Box<dyn Notifier>,
        formatter: ReportFormatter,
        full_listing_every: u64,
    ) -> Self {
        Self {
            orchestrator,
            store,
            notifier,
            formatter,
            full_listing_every,
        }
    }

    #[must_use]
    pub fn orchestrator(&self) -> &SourceOrchestrator<P, B> {
        &self.orchestrator
    }

    /// Run one cycle to completion.
    ///
    /// Failures before the save leave the stored snapshot untouched and are
    /// reported through the notifier; they never propagate.
    pub async fn run_cycle(&self, state: &mut CycleState) -> CycleOutcome {
        let entries = match self.orchestrator.acquire().await {
            Ok(entries) => entries,
            Err(e) => {
                error!(error = %e, "Leaderboard acquisition failed");
                return self.fail(&e).await;
            }
        };

        let old = self.store.load();
        let new = Snapshot::from_entries(&entries, Utc::now());
        let changes = diff(&old.entries, &new.entries);

        let polls_done = state.polls_done + 1;
        let full_due = self.full_listing_every > 0 && polls_done % self.full_listing_every == 0;

        let diff_blocks = match self.formatter.format_diff(&changes) {
            Ok(blocks) => blocks,
            Err(e) => return self.fail(&e).await,
        };
        let full_blocks = if full_due {
            match self.formatter.format_full(&entries) {
                Ok(blocks) => blocks,
                Err(e) => return self.fail(&e).await,
            }
        } else {
            Vec::new()
        };

        let outcome = if old.is_empty() {
            info!(entries = entries.len(), "Baseline snapshot established");
            CycleOutcome::Baseline {
                entries: entries.len(),
            }
        } else if changes.is_empty() {
            info!("No changes in leaderboard");
            CycleOutcome::Unchanged {
                entries: entries.len(),
            }
        } else {
            info!(
                entrants = changes.entrants.len(),
                exits = changes.exits.len(),
                rank_changes = changes.rank_changes.len(),
                "Leaderboard changed"
            );
            CycleOutcome::Changed { diff: changes }
        };

        self.send_all(&diff_blocks).await;
        if full_due {
            info!(polls_done, "Sending full listing");
            self.send_all(&full_blocks).await;
        }
        state.polls_done = polls_done;

        if let Err(e) = self.store.save(&new) {
            error!(error = %e, "Failed to save snapshot");
            self.report(&e).await;
        }

        outcome
    }

    async fn send_all(&self, blocks: &[String]) {
        for block in blocks {
            self.notifier.send(block).await;
        }
    }

    async fn report(&self, error: &(dyn Display + Sync)) {
        match self.formatter.format_failure(error) {
            Ok(blocks) => self.send_all(&blocks).await,
            Err(e) => warn!(error = %e, "Failed to render failure report"),
        }
    }

    async fn fail(&self, error: &(dyn Display + Sync)) -> CycleOutcome {
        self.report(error).await;
        CycleOutcome::Failed {
            reason: error.to_string(),
        }
    }
}
