//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Hammer - Concurrent HTTP load-testing tool
///
/// clap's automatic `-h` short flag is disabled so that `-h` can carry the
/// hammer count; `--help` still prints usage.
#[derive(Parser, Debug)]
#[command(name = "hammer")]
#[command(version, about, long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// URL to hammer with GET requests
    #[arg(value_name = "URL")]
    pub url: String,

    // === Load Options ===
    /// Number of concurrent hammers (workers)
    #[arg(short = 'h', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub hammers: u32,

    /// Number of sequential throws (requests) per hammer
    #[arg(short = 't', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub throws: u32,

    // === Output Options ===
    /// Display the text of each response
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Show latency statistics after the total average
    #[arg(long)]
    pub show_latency: bool,

    /// JSON report output file path
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    /// Enable debug output (timing, effective configuration)
    #[arg(long)]
    pub debug: bool,

    /// Print help
    #[arg(long, action = clap::ArgAction::HelpLong)]
    help: Option<bool>,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    ///
    /// The hammer and throw counts are already range-checked by the parser;
    /// this catches value-level problems such as an unparseable URL before
    /// any configuration is built.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.url.trim().is_empty() {
            anyhow::bail!("URL must not be empty");
        }

        let url = reqwest::Url::parse(&self.url)
            .map_err(|e| anyhow::anyhow!("Invalid URL '{}': {}", self.url, e))?;

        match url.scheme() {
            "http" | "https" => {}
            other => anyhow::bail!(
                "Unsupported URL scheme '{}' (only http and https are supported)",
                other
            ),
        }

        Ok(())
    }
}
