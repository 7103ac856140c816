//! Logging initialisation for the binaries.
//!
//! Structured JSON logs go to **stderr**; stdout carries only the sealed or
//! opened payload. Key material and plaintext are never logged.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialise the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `log_level` when set.
///
/// # Errors
///
/// Returns an error if a subscriber has already been set.
pub fn init(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise tracing subscriber: {e}"))
}
