//! Statistics collection
//!
//! Per-hammer timing statistics and run-level aggregation. Each hammer owns
//! its `HammerStats` exclusively while it runs; nothing here is shared
//! between threads, so no locks or atomics are needed. Results flow back to
//! the coordinator by value when the hammer finishes.

pub mod aggregator;
pub mod histogram;

use histogram::LatencyHistogram;
use std::time::Duration;

/// Timing statistics for a single hammer
///
/// Accumulates one sample per throw: a running total for the average plus a
/// histogram sample for percentile queries.
#[derive(Debug, Clone)]
pub struct HammerStats {
    /// Number of throws recorded
    throws: u64,

    /// Total elapsed time across all recorded throws
    total_time: Duration,

    /// Per-throw latency distribution
    latency: LatencyHistogram,
}

impl HammerStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self {
            throws: 0,
            total_time: Duration::ZERO,
            latency: LatencyHistogram::new(),
        }
    }

    /// Record the elapsed time of one throw
    pub fn record_throw(&mut self, elapsed: Duration) {
        self.throws += 1;
        self.total_time += elapsed;
        self.latency.record(elapsed);
    }

    /// Number of throws recorded
    pub fn throws(&self) -> u64 {
        self.throws
    }

    /// Total elapsed time across all recorded throws
    pub fn total_time(&self) -> Duration {
        self.total_time
    }

    /// Arithmetic mean elapsed time of all recorded throws
    ///
    /// Returns zero when nothing has been recorded; validated configurations
    /// never reach that case.
    pub fn average(&self) -> Duration {
        if self.throws == 0 {
            return Duration::ZERO;
        }
        self.total_time / self.throws as u32
    }

    /// Per-throw latency distribution
    pub fn latency(&self) -> &LatencyHistogram {
        &self.latency
    }

    /// Merge another hammer's statistics into this one
    ///
    /// This is how the aggregator builds the combined run-level view from
    /// every hammer's individual results.
    pub fn merge(&mut self, other: &HammerStats) -> crate::Result<()> {
        self.throws += other.throws;
        self.total_time += other.total_time;
        self.latency.merge(&other.latency)
    }
}

impl Default for HammerStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_are_empty() {
        let stats = HammerStats::new();
        assert_eq!(stats.throws(), 0);
        assert_eq!(stats.total_time(), Duration::ZERO);
        assert_eq!(stats.average(), Duration::ZERO);
        assert!(stats.latency().is_empty());
    }

    #[test]
    fn test_average_of_recorded_throws() {
        // Throws of 1s, 2s, 3s average to exactly 2s
        let mut stats = HammerStats::new();
        stats.record_throw(Duration::from_secs(1));
        stats.record_throw(Duration::from_secs(2));
        stats.record_throw(Duration::from_secs(3));

        assert_eq!(stats.throws(), 3);
        assert_eq!(stats.total_time(), Duration::from_secs(6));
        assert_eq!(stats.average(), Duration::from_secs(2));
    }

    #[test]
    fn test_single_throw_average() {
        let mut stats = HammerStats::new();
        stats.record_throw(Duration::from_millis(500));
        assert_eq!(stats.average(), Duration::from_millis(500));
    }

    #[test]
    fn test_fractional_average() {
        let mut stats = HammerStats::new();
        stats.record_throw(Duration::from_millis(100));
        stats.record_throw(Duration::from_millis(200));
        let avg = stats.average();
        assert_eq!(avg, Duration::from_millis(150));
    }

    #[test]
    fn test_merge() {
        let mut a = HammerStats::new();
        a.record_throw(Duration::from_secs(1));

        let mut b = HammerStats::new();
        b.record_throw(Duration::from_secs(3));

        a.merge(&b).unwrap();
        assert_eq!(a.throws(), 2);
        assert_eq!(a.average(), Duration::from_secs(2));
        assert_eq!(a.latency().len(), 2);
    }
}
