//! Holdwatch - top-holders leaderboard monitoring.
//!
//! Periodically acquires a ranked leaderboard (the top ETH holders by
//! default), compares it to the previously stored snapshot and reports
//! entrants, exits and rank shifts to an operator channel.
//!
//! # Architecture
//!
//! - **`domain`** - Entries, snapshots and the pure snapshot diff
//! - **`port`** - Traits at the system boundary: sources, store, notifier
//! - **`adapter`** - Structured-page and GraphQL sources, JSON store, Telegram
//! - **`application`** - Two-tier acquisition, report rendering, the cycle
//! - **`infrastructure`** - Configuration, logging, scheduling, wiring
//!
//! # Features
//!
//! - `telegram` - Deliver reports through a Telegram bot (default)
//!
//! # Example
//!
//! ```no_run
//! use holdwatch::domain::{diff, Entry, Snapshot};
//! use chrono::Utc;
//!
//! let old = Snapshot::from_entries(&[Entry::new("0xA", 1, 10.0, "10 ETH")], Utc::now());
//! let new = Snapshot::from_entries(&[Entry::new("0xB", 1, 12.0, "12 ETH")], Utc::now());
//! let changes = diff(&old.entries, &new.entries);
//! assert_eq!(changes.entrants.len(), 1);
//! ```

pub mod adapter;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
