//! hud — a rolling strip-chart telemetry overlay for Wayland compositors.
//!
//! Run with:  `RUST_LOG=info hud`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("hud v{} starting", env!("CARGO_PKG_VERSION"));

    hud_wayland::run().map_err(Into::into)
}
