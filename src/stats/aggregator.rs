//! Statistics aggregation
//!
//! Merges per-hammer statistics into the run-level view. The headline metric
//! is the mean of the per-hammer averages (each hammer contributes one value,
//! regardless of how many throws it made), which is what the final output
//! line reports. The combined view merges every hammer's stats into one for
//! the optional latency summary.

use crate::stats::HammerStats;
use std::collections::HashMap;
use std::time::Duration;

/// Aggregator for per-hammer results
///
/// # Usage
///
/// 1. Create with `new()`
/// 2. Add each hammer's statistics with `add_hammer()`
/// 3. Query `total_average()` / `combined()` once all hammers are in
#[derive(Debug)]
pub struct RunAggregator {
    /// Per-hammer statistics (hammer id -> stats)
    hammers: HashMap<usize, HammerStats>,
}

impl RunAggregator {
    /// Create a new, empty aggregator
    pub fn new() -> Self {
        Self {
            hammers: HashMap::new(),
        }
    }

    /// Add statistics from one hammer
    pub fn add_hammer(&mut self, hammer_id: usize, stats: HammerStats) {
        self.hammers.insert(hammer_id, stats);
    }

    /// Number of hammers whose results have been added
    pub fn num_hammers(&self) -> usize {
        self.hammers.len()
    }

    /// Hammer ids in ascending order for consistent iteration
    pub fn hammer_ids(&self) -> Vec<usize> {
        let mut ids: Vec<usize> = self.hammers.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Statistics for a specific hammer, if present
    pub fn hammer_stats(&self, hammer_id: usize) -> Option<&HammerStats> {
        self.hammers.get(&hammer_id)
    }

    /// Mean of the per-hammer average elapsed times
    ///
    /// Every hammer counts equally: a hammer's throws are averaged first,
    /// then the averages are averaged. Returns zero when no hammers have
    /// been added.
    pub fn total_average(&self) -> Duration {
        if self.hammers.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.hammers.values().map(|s| s.average()).sum();
        total / self.hammers.len() as u32
    }

    /// Merge all hammers' statistics into a single combined view
    ///
    /// The combined stats pool every throw across the run: total throw
    /// count, total elapsed time, and the pooled latency histogram. Note
    /// that `combined().average()` is the per-throw mean, which differs from
    /// `total_average()` when hammers record different throw counts.
    pub fn combined(&self) -> crate::Result<HammerStats> {
        let mut combined = HammerStats::new();
        for stats in self.hammers.values() {
            combined.merge(stats)?;
        }
        Ok(combined)
    }
}

impl Default for RunAggregator {
    fn default() -> Self {
        Self::new()
    }
}
