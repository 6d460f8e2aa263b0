//! Handler for the `run` command.

use std::time::Duration;

use tokio::signal;
use tracing::info;

use crate::cli::RunArgs;
use crate::error::Result;
use crate::infrastructure::bootstrap::{build_monitor, MonitorJob};
use crate::infrastructure::config::Config;
use crate::infrastructure::scheduler::{Job, Scheduler};

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;

    // Apply CLI overrides
    config.logging = config
        .logging
        .with_overrides(args.log_level.as_deref(), args.json_logs);
    if args.telegram {
        config.telegram.enabled = true;
        config.validate()?;
    }

    config.logging.init();

    info!(
        interval_secs = config.monitor.poll_interval_secs,
        full_listing_every = config.monitor.full_listing_every,
        top_n = config.monitor.top_n,
        snapshot = %config.monitor.snapshot_path.display(),
        "holdwatch starting"
    );

    let monitor = build_monitor(&config)?;
    let mut job = MonitorJob::new(monitor);

    if args.once {
        job.run().await;
        info!(outcome = ?job.last_outcome(), "Single cycle finished");
        return Ok(());
    }

    let scheduler = Scheduler::new(Duration::from_secs(config.monitor.poll_interval_secs));
    tokio::select! {
        () = scheduler.run(&mut job) => {}
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!(polls_done = job.state().polls_done, "holdwatch stopped");
    Ok(())
}
