//! JSON report output
//!
//! Serializes a completed run into a JSON report with per-hammer averages
//! and pooled latency percentiles. Durations carry both raw seconds and a
//! human-readable rendering so the report reads well without postprocessing.

use crate::config::Config;
use crate::coordinator::RunSummary;
use crate::stats::histogram::LatencyHistogram;
use crate::util::time::format_duration;
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use std::time::Duration;

/// Duration with both raw seconds and human-readable form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonDuration {
    pub secs: f64,
    pub human: String,
}

impl JsonDuration {
    pub fn from_duration(d: Duration) -> Self {
        Self {
            secs: d.as_secs_f64(),
            human: format_duration(d),
        }
    }
}

/// Latency statistics with percentiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonLatency {
    pub min: JsonDuration,
    pub mean: JsonDuration,
    pub max: JsonDuration,
    pub p50: JsonDuration,
    pub p90: JsonDuration,
    pub p95: JsonDuration,
    pub p99: JsonDuration,
    pub p99_9: JsonDuration,
}

impl JsonLatency {
    /// Build from a histogram; None if no samples were recorded
    fn from_histogram(hist: &LatencyHistogram) -> Option<Self> {
        Some(Self {
            min: JsonDuration::from_duration(hist.min()?),
            mean: JsonDuration::from_duration(hist.mean()?),
            max: JsonDuration::from_duration(hist.max()?),
            p50: JsonDuration::from_duration(hist.percentile(50.0)?),
            p90: JsonDuration::from_duration(hist.percentile(90.0)?),
            p95: JsonDuration::from_duration(hist.percentile(95.0)?),
            p99: JsonDuration::from_duration(hist.percentile(99.0)?),
            p99_9: JsonDuration::from_duration(hist.percentile(99.9)?),
        })
    }
}

/// One hammer's contribution to the report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HammerReport {
    pub id: usize,
    pub throws: u64,
    pub average: JsonDuration,
}

/// Complete run report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub timestamp: String,
    pub url: String,
    pub hammers: usize,
    pub throws_per_hammer: usize,
    pub wall_time: JsonDuration,
    pub total_average: JsonDuration,
    pub per_hammer: Vec<HammerReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency: Option<JsonLatency>,
}

impl RunReport {
    /// Build the report for a completed run
    pub fn build(config: &Config, summary: &RunSummary) -> Self {
        let aggregator = summary.aggregator();

        let per_hammer = aggregator
            .hammer_ids()
            .into_iter()
            .filter_map(|id| {
                aggregator.hammer_stats(id).map(|stats| HammerReport {
                    id,
                    throws: stats.throws(),
                    average: JsonDuration::from_duration(stats.average()),
                })
            })
            .collect();

        let latency = aggregator
            .combined()
            .ok()
            .and_then(|stats| JsonLatency::from_histogram(stats.latency()));

        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            url: config.target.url.clone(),
            hammers: config.load.hammers,
            throws_per_hammer: config.load.throws,
            wall_time: JsonDuration::from_duration(summary.elapsed()),
            total_average: JsonDuration::from_duration(summary.total_average()),
            per_hammer,
            latency,
        }
    }
}

/// Write a run report to the given path as pretty-printed JSON
pub fn write_report(path: &Path, report: &RunReport) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create JSON report file: {}", path.display()))?;

    serde_json::to_writer_pretty(file, report)
        .with_context(|| format!("Failed to write JSON report: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LoadConfig, OutputConfig, TargetConfig};
    use crate::coordinator::RunSummary;
    use crate::stats::aggregator::RunAggregator;
    use crate::stats::HammerStats;

    fn sample_summary() -> RunSummary {
        let mut aggregator = RunAggregator::new();

        let mut stats0 = HammerStats::new();
        stats0.record_throw(Duration::from_secs(1));
        aggregator.add_hammer(0, stats0);

        let mut stats1 = HammerStats::new();
        stats1.record_throw(Duration::from_secs(3));
        aggregator.add_hammer(1, stats1);

        RunSummary::new(aggregator, Duration::from_secs(4))
    }

    fn sample_config() -> Config {
        Config {
            target: TargetConfig {
                url: "http://example.com".to_string(),
            },
            load: LoadConfig {
                hammers: 2,
                throws: 1,
            },
            output: OutputConfig::default(),
        }
    }

    #[test]
    fn test_report_contents() {
        let report = RunReport::build(&sample_config(), &sample_summary());

        assert_eq!(report.url, "http://example.com");
        assert_eq!(report.hammers, 2);
        assert_eq!(report.throws_per_hammer, 1);
        assert_eq!(report.per_hammer.len(), 2);
        assert_eq!(report.per_hammer[0].id, 0);
        assert_eq!(report.per_hammer[1].id, 1);
        assert!((report.total_average.secs - 2.0).abs() < 1e-9);
        assert!(report.latency.is_some());
    }

    #[test]
    fn test_report_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        let report = RunReport::build(&sample_config(), &sample_summary());
        write_report(&path, &report).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: RunReport = serde_json::from_str(&content).unwrap();

        assert_eq!(parsed.url, report.url);
        assert_eq!(parsed.hammers, report.hammers);
        assert_eq!(parsed.per_hammer.len(), 2);
        assert!((parsed.total_average.secs - report.total_average.secs).abs() < 1e-9);
    }

    #[test]
    fn test_write_report_fails_on_missing_directory() {
        let report = RunReport::build(&sample_config(), &sample_summary());
        let path = Path::new("/nonexistent-dir-for-sure/report.json");
        assert!(write_report(path, &report).is_err());
    }
}
