//! Hammer CLI entry point

use anyhow::{Context, Result};
use hammer::config::{cli::Cli, validator, Config, LoadConfig, OutputConfig, TargetConfig};
use hammer::coordinator::Coordinator;
use hammer::output;
use std::sync::Arc;
use std::time::Instant;

fn main() -> Result<()> {
    // Parse CLI arguments
    let parse_start = Instant::now();
    let cli = Cli::parse_args();
    cli.validate()?;
    if cli.debug {
        eprintln!(
            "DEBUG TIMING: CLI parse: {:.3}s",
            parse_start.elapsed().as_secs_f64()
        );
    }

    // Build configuration from CLI
    let config = build_config_from_cli(&cli);

    // Validate configuration before any network activity
    validator::validate_config(&config).context("Configuration validation failed")?;

    if cli.debug {
        eprint!("DEBUG: {}", config);
    }

    // Run the load test
    let config = Arc::new(config);
    let coordinator = Coordinator::new(Arc::clone(&config));
    let summary = coordinator.run()?;

    // Report results
    output::text::print_total_average(summary.total_average());

    if config.output.show_latency {
        output::text::print_latency_summary(&summary);
    }

    if let Some(ref path) = config.output.json_output {
        let report = output::json::RunReport::build(&config, &summary);
        output::json::write_report(path, &report)?;
        if config.output.debug {
            eprintln!("DEBUG: JSON report written to {}", path.display());
        }
    }

    Ok(())
}

/// Build configuration from CLI arguments
fn build_config_from_cli(cli: &Cli) -> Config {
    Config {
        target: TargetConfig {
            url: cli.url.clone(),
        },
        load: LoadConfig {
            hammers: cli.hammers as usize,
            throws: cli.throws as usize,
        },
        output: OutputConfig {
            verbose: cli.verbose,
            show_latency: cli.show_latency,
            json_output: cli.json_output.clone(),
            debug: cli.debug,
        },
    }
}
