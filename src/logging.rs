//! Tracing subscriber setup for the `folio` binary.
//!
//! Logs go to stderr so stdout stays clean for answers and JSON output.
//! `FOLIO_LOG` (an `EnvFilter` directive) wins over everything else.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Pick the filter level: `--quiet` beats `--verbose` beats the config value.
pub fn effective_level<'a>(configured: &'a str, verbose: bool, quiet: bool) -> &'a str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    }
}

pub fn init_tracing(configured: &str, verbose: bool, quiet: bool) -> Result<()> {
    let level = effective_level(configured, verbose, quiet).to_lowercase();

    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
