//! Logging initialization
//!
//! Call sites log through the `log` facade; records are forwarded into a
//! `tracing-subscriber` fmt subscriber together with the request spans emitted
//! by `tower-http`.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Default filter when RUST_LOG is unset
const DEFAULT_FILTER: &str = "info,tower_http=info";

/// Initialize the global logger (console output)
///
/// The filter is read from `RUST_LOG`, e.g. `RUST_LOG=instacap=debug`.
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - A global logger was already installed
pub fn init_logger() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}
