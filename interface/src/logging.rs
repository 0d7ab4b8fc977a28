use std::error::Error;

use tracing_subscriber::EnvFilter;

/// Routes `log` records to stderr. Verbosity comes from `RUST_LOG`, `info` otherwise.
pub fn init_logging() -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .try_init()?;
    log::info!("mux simulator v{} started", env!("CARGO_PKG_VERSION"));
    Ok(())
}
