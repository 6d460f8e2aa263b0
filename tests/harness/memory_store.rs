use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use holdwatch::domain::Snapshot;
use holdwatch::error::StoreError;
use holdwatch::port::SnapshotStore;

/// In-memory snapshot store that counts saves and can be told to fail.
#[derive(Clone, Default)]
pub struct MemoryStore {
    snapshot: Arc<Mutex<Snapshot>>,
    saves: Arc<AtomicUsize>,
    fail_saves: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        let store = Self::default();
        *store.snapshot.lock().expect("lock snapshot") = snapshot;
        store
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn current(&self) -> Snapshot {
        self.snapshot.lock().expect("lock snapshot").clone()
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Snapshot {
        self.current()
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only store",
            )));
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.snapshot.lock().expect("lock snapshot") = snapshot.clone();
        Ok(())
    }
}
