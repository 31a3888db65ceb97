//! Hammer - Concurrent HTTP load-testing tool
//!
//! Hammer dispatches a configurable number of parallel workers ("hammers"),
//! each issuing a configurable number of sequential GET requests ("throws")
//! against a target URL, and reports per-throw, per-hammer, and overall
//! average elapsed times.
//!
//! # Architecture
//!
//! - **Worker**: one hammer, a sequential timed request loop on its own thread
//! - **Coordinator**: spawns all hammers, joins them at a single barrier,
//!   reduces their averages
//! - **Stats**: per-hammer latency histograms and run-level aggregation
//! - **Output**: human-readable progress lines plus an optional JSON report

pub mod config;
pub mod coordinator;
pub mod output;
pub mod stats;
pub mod util;
pub mod worker;

// Re-export commonly used types
pub use config::Config;
pub use coordinator::Coordinator;

/// Result type used throughout Hammer
pub type Result<T> = anyhow::Result<T>;
