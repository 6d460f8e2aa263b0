//! JSON file snapshot store.
//!
//! Writes go to a temporary sibling file that is synced and renamed over the
//! target, so readers observe either the old or the new document.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::Snapshot;
use crate::error::StoreError;
use crate::port::SnapshotStore;

/// Stores the latest snapshot as a pretty-printed JSON document.
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load(&self) -> Snapshot {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No snapshot yet, starting empty");
                return Snapshot::default();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read snapshot, starting empty");
                return Snapshot::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Unreadable snapshot, starting empty");
                Snapshot::default()
            }
        }
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(snapshot)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.temp_path();
        let cleanup_and_err = |e: std::io::Error| {
            let _ = fs::remove_file(&temp_path);
            e
        };

        let mut file = fs::File::create(&temp_path)?;
        file.write_all(json.as_bytes()).map_err(cleanup_and_err)?;
        file.sync_all().map_err(cleanup_and_err)?;
        drop(file);

        fs::rename(&temp_path, &self.path).map_err(cleanup_and_err)?;
        debug!(path = %self.path.display(), entries = snapshot.len(), "Snapshot saved");
        Ok(())
    }
}
