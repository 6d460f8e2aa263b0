//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! leaderboard logic.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Configuration loading and validation
//! - [`scheduler`] - Fixed-interval, non-overlapping cycle execution

pub mod bootstrap;
pub mod config;
pub mod scheduler;
