//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the monitoring cycle.

pub mod acquisition;
pub mod cycle;
pub mod report;

pub use acquisition::{AcquisitionSettings, SourceOrchestrator};
pub use cycle::{CycleOutcome, CycleState, Monitor};
pub use report::ReportFormatter;
