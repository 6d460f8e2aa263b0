//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │ Source  │            │  Snapshot   │              │ Notifier  │
//! │ Adapter │            │   Store     │              │  Adapter  │
//! └─────────┘            └─────────────┘              └───────────┘
//! ```
//!
//! - [`LeaderboardSource`] - ranked list retrieval from one upstream
//! - [`SnapshotStore`] - durable last-known snapshot
//! - [`Notifier`] - outbound text delivery (Telegram, logging)

pub mod outbound;

pub use outbound::notifier::Notifier;
pub use outbound::source::LeaderboardSource;
pub use outbound::store::SnapshotStore;
