//! Logging setup.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global `tracing` subscriber.
///
/// The filter comes from `config.log_level` (`RUST_LOG` syntax); output is
/// human-readable text or one JSON object per line depending on
/// `config.log_format`.
///
/// # Errors
///
/// Returns an error if the filter does not parse or a global subscriber is
/// already installed.
pub fn init(config: &Config) -> Result<()> {
    let filter =
        EnvFilter::try_new(&config.log_level).context("RUST_LOG is not a valid filter")?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match config.log_format.as_str() {
        "json" => builder.json().try_init(),
        _ => builder.try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}
