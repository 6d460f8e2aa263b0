//! Composition root: builds the monitor from configuration.

use async_trait::async_trait;
use tracing::{info, warn};

#[cfg(feature = "telegram")]
use crate::adapter::outbound::notifier::telegram::{TelegramConfig, TelegramNotifier};
use crate::adapter::outbound::source::{PageSource, QuerySource, Source};
use crate::adapter::outbound::store::JsonSnapshotStore;
use crate::application::{
    AcquisitionSettings, CycleOutcome, CycleState, Monitor, ReportFormatter, SourceOrchestrator,
};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::scheduler::Job;
use crate::port::outbound::notifier::LogNotifier;
use crate::port::{LeaderboardSource, Notifier};

/// The monitor as wired for production.
pub type LeaderboardMonitor = Monitor<Source, Source>;

/// Build the primary source and, when a credential exists, the backup.
pub fn build_sources(config: &Config) -> Result<(Source, Option<Source>)> {
    let primary = Source::Page(PageSource::new(config.source.page.clone())?);

    let backup = if config.source.query.has_credential() {
        info!("Backup query source enabled");
        Some(Source::Query(QuerySource::new(config.source.query.clone())?))
    } else {
        info!("BITQUERY_API_KEY not set, running without backup source");
        None
    };

    Ok((primary, backup))
}

/// Build the two-tier orchestrator.
pub fn build_orchestrator(config: &Config) -> Result<SourceOrchestrator<Source>> {
    let (primary, backup) = build_sources(config)?;
    Ok(SourceOrchestrator::new(
        primary,
        backup,
        AcquisitionSettings {
            top_n: config.monitor.top_n,
            min_plausible: config.monitor.min_plausible,
        },
    ))
}

/// Build the notifier: Telegram when enabled and configured, logging otherwise.
#[cfg(feature = "telegram")]
#[must_use]
pub fn build_notifier(config: &Config) -> Box<dyn Notifier> {
    if config.telegram.enabled {
        match (&config.telegram.bot_token, config.telegram.parsed_chat_id()) {
            (Some(bot_token), Some(chat_id)) => {
                let tg_config = TelegramConfig {
                    bot_token: bot_token.clone(),
                    chat_id,
                };
                return Box::new(TelegramNotifier::new(&tg_config));
            }
            _ => warn!("Telegram enabled but TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID not set"),
        }
    }
    info!("Reports will be written to the log");
    Box::new(LogNotifier)
}

/// Build the notifier (non-telegram variant).
#[cfg(not(feature = "telegram"))]
#[must_use]
pub fn build_notifier(config: &Config) -> Box<dyn Notifier> {
    if config.telegram.enabled {
        warn!("Telegram enabled in config but the telegram feature is not compiled in");
    }
    Box::new(LogNotifier)
}

#[must_use]
pub fn build_formatter(config: &Config) -> ReportFormatter {
    ReportFormatter::new(
        config.monitor.title.clone(),
        config.monitor.top_n,
        config.monitor.max_message_len,
    )
}

/// Wire a production monitor from configuration.
pub fn build_monitor(config: &Config) -> Result<LeaderboardMonitor> {
    Ok(Monitor::new(
        build_orchestrator(config)?,
        Box::new(JsonSnapshotStore::new(&config.monitor.snapshot_path)),
        build_notifier(config),
        build_formatter(config),
        config.monitor.full_listing_every,
    ))
}

/// A monitor paired with its cycle state, runnable by the scheduler.
pub struct MonitorJob<P, B = P> {
    monitor: Monitor<P, B>,
    state: CycleState,
    last_outcome: Option<CycleOutcome>,
}

impl<P, B> MonitorJob<P, B> {
    pub fn new(monitor: Monitor<P, B>) -> Self {
        Self {
            monitor,
            state: CycleState::default(),
            last_outcome: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &CycleState {
        &self.state
    }

    #[must_use]
    pub fn last_outcome(&self) -> Option<&CycleOutcome> {
        self.last_outcome.as_ref()
    }
}

#[async_trait]
impl<P, B> Job for MonitorJob<P, B>
where
    P: LeaderboardSource,
    B: LeaderboardSource,
{
    async fn run(&mut self) {
        let outcome = self.monitor.run_cycle(&mut self.state).await;
        self.last_outcome = Some(outcome);
    }
}
