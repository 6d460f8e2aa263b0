//! Handler for the `snapshot` command.

use std::path::Path;

use crate::adapter::outbound::store::JsonSnapshotStore;
use crate::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_formatter;
use crate::infrastructure::config::Config;
use crate::port::SnapshotStore;

/// Print the stored snapshot.
pub fn execute<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path)?;
    let store = JsonSnapshotStore::new(&config.monitor.snapshot_path);
    let snapshot = store.load();

    if snapshot.is_empty() {
        output::warn(&format!(
            "No snapshot stored at {}",
            config.monitor.snapshot_path.display()
        ));
        return Ok(());
    }

    output::section("Stored Snapshot");
    output::key_value("Captured at", snapshot.captured_at.to_rfc3339());
    output::key_value("Entries", snapshot.len());
    println!();
    print!("{}", build_formatter(&config).render_full(&snapshot.to_entries())?);
    Ok(())
}
