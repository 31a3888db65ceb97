//! Configuration module
//!
//! Handles CLI argument parsing and validation.

pub mod cli;
pub mod validator;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Complete run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub target: TargetConfig,
    pub load: LoadConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Target configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// URL to issue GET requests against
    pub url: String,
}

/// Load configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Number of concurrent hammers (workers)
    #[serde(default = "default_count")]
    pub hammers: usize,
    /// Number of sequential throws (requests) per hammer
    #[serde(default = "default_count")]
    pub throws: usize,
}

fn default_count() -> usize {
    1
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Echo each response body to stdout
    #[serde(default)]
    pub verbose: bool,
    /// Show latency statistics after the total average
    #[serde(default)]
    pub show_latency: bool,
    /// JSON report output file path
    pub json_output: Option<PathBuf>,
    /// Enable debug output on stderr
    #[serde(default)]
    pub debug: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            show_latency: false,
            json_output: None,
            debug: false,
        }
    }
}

// Display trait implementations

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration:")?;
        writeln!(f, "  Target: {}", self.target)?;
        writeln!(f, "  Load: {}", self.load)?;
        writeln!(f, "  Output: {}", self.output)?;
        Ok(())
    }
}

impl fmt::Display for TargetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

impl fmt::Display for LoadConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hammer(s) x {} throw(s) = {} request(s)",
            self.hammers,
            self.throws,
            self.hammers * self.throws
        )
    }
}

impl fmt::Display for OutputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.verbose {
            parts.push("verbose".to_string());
        }
        if self.show_latency {
            parts.push("latency".to_string());
        }
        if let Some(ref path) = self.json_output {
            parts.push(format!("json={}", path.display()));
        }
        if parts.is_empty() {
            write!(f, "text output")
        } else {
            write!(f, "{}", parts.join(", "))
        }
    }
}

// Validation methods

impl Config {
    /// Validate the complete configuration
    pub fn validate(&self) -> Result<(), String> {
        self.target.validate()?;
        self.load.validate()?;
        Ok(())
    }
}

impl TargetConfig {
    /// Validate the target configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.url.trim().is_empty() {
            return Err("target URL must not be empty".to_string());
        }
        Ok(())
    }
}

impl LoadConfig {
    /// Validate the load configuration
    ///
    /// Zero hammers or throws would make the average undefined, so both are
    /// rejected here before any worker is dispatched.
    pub fn validate(&self) -> Result<(), String> {
        if self.hammers == 0 {
            return Err("hammers must be at least 1".to_string());
        }
        if self.throws == 0 {
            return Err("throws must be at least 1".to_string());
        }
        Ok(())
    }
}
