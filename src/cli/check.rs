//! Handlers for `check` subcommands.

use std::path::Path;

use crate::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_orchestrator;
use crate::infrastructure::config::Config;

/// Validate the configuration file and print the effective settings.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(&config_path)?;

    output::section("Configuration");
    output::key_value("File", config_path.as_ref().display());
    output::key_value("Poll interval", format!("{}s", config.monitor.poll_interval_secs));
    output::key_value("Full listing", format!("every {} cycles", config.monitor.full_listing_every));
    output::key_value("Snapshot", config.monitor.snapshot_path.display());
    output::key_value("Top N", config.monitor.top_n);
    output::key_value("Min plausible", config.monitor.min_plausible);
    output::key_value("Max message", config.monitor.max_message_len);
    output::key_value("Page URLs", config.source.page.urls.join(", "));
    output::key_value("Max pages", config.source.page.max_pages);
    output::key_value(
        "Backup source",
        if config.source.query.has_credential() {
            "configured"
        } else {
            "not configured"
        },
    );
    output::key_value("Telegram", if config.telegram.enabled { "enabled" } else { "disabled" });

    output::ok("Configuration is valid");
    Ok(())
}

/// Run one acquisition and summarize it without touching the snapshot.
pub async fn execute_source<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path)?;
    config.logging.init();
    let orchestrator = build_orchestrator(&config)?;

    output::section("Source Check");
    if !orchestrator.has_backup() {
        output::warn("No backup source configured");
    }

    output::progress("Fetching leaderboard");
    let result = orchestrator.acquire().await;
    output::progress_done(result.is_ok());

    match result {
        Ok(entries) => {
            output::key_value("Entries", entries.len());
            if let Some(first) = entries.first() {
                output::entry(first);
            }
            if entries.len() > 1 {
                if let Some(last) = entries.last() {
                    output::entry(last);
                }
            }
            output::ok("Leaderboard acquired; snapshot left untouched");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
