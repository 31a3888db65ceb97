//! Coordinator module
//!
//! Orchestrates hammers and aggregates their results. The coordinator's
//! lifecycle is a single synchronous phase: build all work specs, spawn one
//! thread per hammer, join them all at a single barrier, reduce.

use crate::config::Config;
use crate::stats::aggregator::RunAggregator;
use crate::stats::HammerStats;
use crate::worker::{Hammer, WorkSpec};
use crate::Result;
use anyhow::Context;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Outcome of a completed run
#[derive(Debug)]
pub struct RunSummary {
    /// Per-hammer statistics, keyed by hammer id
    aggregator: RunAggregator,
    /// Wall-clock duration of the whole run
    elapsed: Duration,
}

impl RunSummary {
    /// Assemble a summary from aggregated results and the run's wall time
    pub fn new(aggregator: RunAggregator, elapsed: Duration) -> Self {
        Self { aggregator, elapsed }
    }

    /// Mean of the per-hammer average elapsed times, the run's headline metric
    pub fn total_average(&self) -> Duration {
        self.aggregator.total_average()
    }

    /// Wall-clock duration of the whole run
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Per-hammer statistics
    pub fn aggregator(&self) -> &RunAggregator {
        &self.aggregator
    }
}

/// Spawns hammers, waits for all of them, and reduces their results
pub struct Coordinator {
    config: Arc<Config>,
}

impl Coordinator {
    /// Create a coordinator for a validated configuration
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Run the full load test
    ///
    /// All hammers start immediately; the degree of parallelism equals the
    /// hammer count, with no queueing or throttling. Every thread is joined
    /// before any failure is acted on, so a failing hammer never leaves
    /// stragglers running. If any hammer failed, the run as a whole fails
    /// and the surviving hammers' results are discarded; no partial average
    /// is reported.
    pub fn run(&self) -> Result<RunSummary> {
        let hammers = self.config.load.hammers;
        let start = Instant::now();

        // Build every work spec before the first dispatch
        let specs: Vec<WorkSpec> = (0..hammers)
            .map(|id| WorkSpec::from_config(&self.config, id))
            .collect();

        let mut handles = Vec::with_capacity(hammers);
        for spec in specs {
            let handle = std::thread::spawn(move || -> Result<(usize, HammerStats)> {
                let id = spec.id;
                let hammer = Hammer::new(spec)?;
                let stats = hammer.run()?;
                Ok((id, stats))
            });
            handles.push(handle);
        }

        // Join barrier: collect every result before deciding the run's fate
        let mut aggregator = RunAggregator::new();
        let mut first_failure: Option<anyhow::Error> = None;
        for handle in handles {
            match handle.join() {
                Ok(Ok((id, stats))) => {
                    aggregator.add_hammer(id, stats);
                }
                Ok(Err(e)) => {
                    if first_failure.is_none() {
                        first_failure = Some(e);
                    }
                }
                Err(_) => {
                    if first_failure.is_none() {
                        first_failure = Some(anyhow::anyhow!("hammer thread panicked"));
                    }
                }
            }
        }

        if let Some(e) = first_failure {
            return Err(e).context("load test run aborted");
        }

        if self.config.output.debug {
            eprintln!(
                "DEBUG: {} hammer(s) completed in {:.3}s",
                aggregator.num_hammers(),
                start.elapsed().as_secs_f64()
            );
        }

        Ok(RunSummary::new(aggregator, start.elapsed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LoadConfig, OutputConfig, TargetConfig};
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve `expected_requests` canned 200 responses on an ephemeral port,
    /// one connection per request.
    fn spawn_stub_server(expected_requests: usize) -> (String, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let addr = listener.local_addr().expect("stub server addr");

        let handle = thread::spawn(move || {
            for _ in 0..expected_requests {
                let (mut stream, _) = match listener.accept() {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                let mut buf = [0u8; 2048];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(
                    b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok",
                );
            }
        });

        (format!("http://{}", addr), handle)
    }

    fn config_for(url: &str, hammers: usize, throws: usize) -> Arc<Config> {
        Arc::new(Config {
            target: TargetConfig {
                url: url.to_string(),
            },
            load: LoadConfig { hammers, throws },
            output: OutputConfig::default(),
        })
    }

    #[test]
    fn test_run_consumes_exactly_one_result_per_hammer() {
        let (url, server) = spawn_stub_server(6);

        let coordinator = Coordinator::new(config_for(&url, 2, 3));
        let summary = coordinator.run().unwrap();

        assert_eq!(summary.aggregator().num_hammers(), 2);
        assert_eq!(summary.aggregator().hammer_ids(), vec![0, 1]);
        assert_eq!(summary.aggregator().combined().unwrap().throws(), 6);
        for id in summary.aggregator().hammer_ids() {
            assert_eq!(summary.aggregator().hammer_stats(id).unwrap().throws(), 3);
        }

        server.join().unwrap();
    }

    #[test]
    fn test_single_hammer_single_throw() {
        let (url, server) = spawn_stub_server(1);

        let coordinator = Coordinator::new(config_for(&url, 1, 1));
        let summary = coordinator.run().unwrap();

        assert_eq!(summary.aggregator().num_hammers(), 1);
        assert_eq!(summary.aggregator().combined().unwrap().throws(), 1);
        assert!(summary.total_average() > Duration::ZERO);
        assert!(summary.elapsed() >= summary.total_average());

        server.join().unwrap();
    }

    #[test]
    fn test_total_average_is_mean_of_hammer_averages() {
        let (url, server) = spawn_stub_server(4);

        let coordinator = Coordinator::new(config_for(&url, 2, 2));
        let summary = coordinator.run().unwrap();

        let expected: Duration = summary
            .aggregator()
            .hammer_ids()
            .iter()
            .map(|&id| summary.aggregator().hammer_stats(id).unwrap().average())
            .sum::<Duration>()
            / 2;
        assert_eq!(summary.total_average(), expected);

        server.join().unwrap();
    }

    #[test]
    fn test_any_hammer_failure_fails_the_run() {
        // Nothing is listening on the target port, so every hammer fails;
        // the run must error rather than report an average of survivors
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let coordinator = Coordinator::new(config_for(&format!("http://{}", addr), 2, 1));
        assert!(coordinator.run().is_err());
    }
}
