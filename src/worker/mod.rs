//! Worker (hammer) implementation
//!
//! A hammer is the core execution unit: it issues a fixed number of
//! sequential timed GET requests against one URL and produces the arithmetic
//! mean elapsed time of those throws.
//!
//! # Lifecycle
//!
//! 1. **Creation**: `Hammer::new()` parses the URL and builds the HTTP client
//! 2. **Execution**: `run()` performs the sequential throw loop
//! 3. **Completion**: returns `HammerStats` with the collected timings
//!
//! # Thread Safety
//!
//! Each hammer owns its client and statistics and runs on its own thread.
//! Hammers share no mutable state and communicate only through returned
//! statistics; the only shared resource is stdout, written one whole line at
//! a time.

use crate::config::Config;
use crate::output::text;
use crate::stats::HammerStats;
use crate::Result;
use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::Url;
use std::time::{Duration, Instant};

/// Fixed work handed to one hammer before it starts
///
/// Built eagerly by the coordinator, one per hammer id; never mutated after
/// construction.
#[derive(Debug, Clone)]
pub struct WorkSpec {
    /// Hammer identifier, unique within a run, used only for labeling output
    pub id: usize,
    /// URL to request
    pub url: String,
    /// Number of sequential requests to issue
    pub throws: usize,
    /// Echo each response body to stdout
    pub verbose: bool,
}

impl WorkSpec {
    /// Build the spec for hammer `id` from the run configuration
    pub fn from_config(config: &Config, id: usize) -> Self {
        Self {
            id,
            url: config.target.url.clone(),
            throws: config.load.throws,
            verbose: config.output.verbose,
        }
    }
}

/// Worker that hammers one URL with sequential timed requests
pub struct Hammer {
    spec: WorkSpec,
    url: Url,
    client: Client,
    stats: HammerStats,
}

impl Hammer {
    /// Create a new hammer for the given work spec
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or the HTTP client cannot
    /// be built.
    pub fn new(spec: WorkSpec) -> Result<Self> {
        let url = Url::parse(&spec.url)
            .with_context(|| format!("Hammer {}: invalid URL '{}'", spec.id, spec.url))?;

        let client = Client::builder()
            .build()
            .with_context(|| format!("Hammer {}: failed to build HTTP client", spec.id))?;

        Ok(Self {
            spec,
            url,
            client,
            stats: HammerStats::new(),
        })
    }

    /// Execute all throws sequentially and return the collected statistics
    ///
    /// Throws run in strictly increasing index order; throw `i+1` never
    /// starts before throw `i` has completed and been recorded. Any request
    /// failure aborts the remaining throws and the hammer returns an error.
    pub fn run(mut self) -> Result<HammerStats> {
        for index in 0..self.spec.throws {
            let elapsed = self.throw(index)?;
            self.stats.record_throw(elapsed);
        }

        text::print_hammer_average(self.spec.id, self.stats.average());

        Ok(self.stats)
    }

    /// Issue one timed GET request
    ///
    /// The response body is read in full before the clock stops, so elapsed
    /// time covers the complete transfer, not just the response headers.
    fn throw(&mut self, index: usize) -> Result<Duration> {
        let start = Instant::now();

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .with_context(|| format!("Hammer {}: throw {} failed", self.spec.id, index))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!(
                "Hammer {}: throw {} returned {}",
                self.spec.id,
                index,
                status
            );
        }

        let body = response.text().with_context(|| {
            format!(
                "Hammer {}: throw {} failed reading response body",
                self.spec.id, index
            )
        })?;

        let elapsed = start.elapsed();

        if self.spec.verbose {
            println!("{}", body);
        }
        text::print_throw(self.spec.id, index, elapsed);

        Ok(elapsed)
    }
}
