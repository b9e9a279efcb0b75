// src/logging.rs

//! Logging setup using `tracing` + `tracing-subscriber`.
//!
//! The level comes from the `WALKFILES_LOG` environment variable (e.g.
//! "info", "debug", or a full `tracing` filter directive), defaulting to
//! `info`. Logs go to STDERR so stdout stays free for consumer output.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialise the global logging subscriber.
///
/// Safe to call once at startup; a second call fails because the global
/// subscriber is already set.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_env("WALKFILES_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))?;

    Ok(())
}
