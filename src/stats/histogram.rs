//! Latency histogram using HdrHistogram
//!
//! Wraps the HdrHistogram library for tracking request latencies. Each hammer
//! owns one histogram; the aggregator merges them for the run-level summary.

use hdrhistogram::Histogram;
use std::time::Duration;

// Track from 1us up to 1 hour; HTTP round trips below a microsecond do not
// occur, and anything beyond an hour has long since hung the run.
const MIN_LATENCY_NS: u64 = 1_000;
const MAX_LATENCY_NS: u64 = 3_600_000_000_000;

/// Request latency histogram
///
/// Configured for 3 significant digits (0.1% precision), which keeps
/// recording and percentile queries O(1) at roughly 2KB per histogram.
#[derive(Debug, Clone)]
pub struct LatencyHistogram {
    histogram: Histogram<u64>,
}

impl LatencyHistogram {
    /// Create a new latency histogram
    pub fn new() -> Self {
        let histogram = Histogram::new_with_bounds(MIN_LATENCY_NS, MAX_LATENCY_NS, 3)
            .expect("Failed to create histogram with valid bounds");

        Self { histogram }
    }

    /// Record a latency sample
    ///
    /// Values outside the tracked range are clamped to the nearest bound.
    #[inline]
    pub fn record(&mut self, latency: Duration) {
        let nanos = latency.as_nanos() as u64;
        let value = nanos.clamp(MIN_LATENCY_NS, MAX_LATENCY_NS);
        let _ = self.histogram.record(value);
    }

    /// Get the value at a specific percentile (0.0 - 100.0)
    ///
    /// Returns None if the histogram is empty.
    pub fn percentile(&self, percentile: f64) -> Option<Duration> {
        if self.histogram.is_empty() {
            return None;
        }
        Some(Duration::from_nanos(
            self.histogram.value_at_percentile(percentile),
        ))
    }

    /// Get the minimum recorded latency, or None if empty
    pub fn min(&self) -> Option<Duration> {
        if self.histogram.is_empty() {
            return None;
        }
        Some(Duration::from_nanos(self.histogram.min()))
    }

    /// Get the maximum recorded latency, or None if empty
    pub fn max(&self) -> Option<Duration> {
        if self.histogram.is_empty() {
            return None;
        }
        Some(Duration::from_nanos(self.histogram.max()))
    }

    /// Get the mean recorded latency, or None if empty
    pub fn mean(&self) -> Option<Duration> {
        if self.histogram.is_empty() {
            return None;
        }
        Some(Duration::from_nanos(self.histogram.mean() as u64))
    }

    /// Get the number of samples recorded
    pub fn len(&self) -> u64 {
        self.histogram.len()
    }

    /// Check if no samples have been recorded
    pub fn is_empty(&self) -> bool {
        self.histogram.is_empty()
    }

    /// Merge another histogram into this one
    pub fn merge(&mut self, other: &LatencyHistogram) -> crate::Result<()> {
        self.histogram
            .add(&other.histogram)
            .map_err(|e| anyhow::anyhow!("Failed to merge histograms: {}", e))
    }
}

impl Default for LatencyHistogram {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_histogram() {
        let hist = LatencyHistogram::new();
        assert!(hist.is_empty());
        assert_eq!(hist.len(), 0);
        assert!(hist.min().is_none());
        assert!(hist.mean().is_none());
        assert!(hist.max().is_none());
        assert!(hist.percentile(50.0).is_none());
    }

    #[test]
    fn test_record_and_query() {
        let mut hist = LatencyHistogram::new();
        hist.record(Duration::from_millis(100));
        hist.record(Duration::from_millis(200));
        hist.record(Duration::from_millis(300));

        assert_eq!(hist.len(), 3);

        // 3 significant digits gives 0.1% precision
        let mean = hist.mean().unwrap();
        assert!(mean >= Duration::from_millis(199));
        assert!(mean <= Duration::from_millis(201));

        let min = hist.min().unwrap();
        assert!(min <= Duration::from_millis(100));

        let max = hist.max().unwrap();
        assert!(max >= Duration::from_millis(299));
    }

    #[test]
    fn test_record_clamps_below_minimum() {
        let mut hist = LatencyHistogram::new();
        hist.record(Duration::from_nanos(1));
        assert_eq!(hist.len(), 1);
    }

    #[test]
    fn test_merge() {
        let mut a = LatencyHistogram::new();
        a.record(Duration::from_millis(100));

        let mut b = LatencyHistogram::new();
        b.record(Duration::from_millis(300));

        a.merge(&b).unwrap();
        assert_eq!(a.len(), 2);
        assert!(a.max().unwrap() >= Duration::from_millis(299));
    }
}
