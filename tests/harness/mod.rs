#![allow(dead_code)]

pub mod memory_store;
pub mod recording_notifier;
pub mod scripted_source;

use holdwatch::domain::Entry;

pub use memory_store::MemoryStore;
pub use recording_notifier::RecordingNotifier;
pub use scripted_source::ScriptedSource;

/// Build a leaderboard where `ids[i]` holds rank `i + 1`.
pub fn board(ids: &[&str]) -> Vec<Entry> {
    ids.iter()
        .zip(1u32..)
        .map(|(id, rank)| {
            let quantity = f64::from(1000 - rank);
            Entry::new(id, rank, quantity, format!("{quantity} ETH"))
        })
        .collect()
}

/// A leaderboard of `n` synthetic identities `0x1..0xn`.
pub fn synthetic_board(n: u32) -> Vec<Entry> {
    let ids: Vec<String> = (1..=n).map(|i| format!("0x{i:x}")).collect();
    let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    board(&refs)
}
