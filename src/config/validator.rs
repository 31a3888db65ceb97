//! Configuration validation

use super::Config;
use anyhow::Result;

/// Validate complete configuration
///
/// Runs before any hammer is dispatched. URL problems are configuration
/// errors, not request errors: they must surface here rather than inside a
/// worker's throw loop.
pub fn validate_config(config: &Config) -> Result<()> {
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    validate_url(&config.target.url)?;

    Ok(())
}

/// Validate that the target URL parses as an absolute http/https URL
fn validate_url(url: &str) -> Result<()> {
    let parsed = reqwest::Url::parse(url)
        .map_err(|e| anyhow::anyhow!("Invalid URL '{}': {}", url, e))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => anyhow::bail!(
            "Unsupported URL scheme '{}' (only http and https are supported)",
            other
        ),
    }

    if parsed.host_str().is_none() {
        anyhow::bail!("URL '{}' has no host", url);
    }

    Ok(())
}
