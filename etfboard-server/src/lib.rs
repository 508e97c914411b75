//! HTTP surface for the etfboard performance pipeline.
//!
//! One route: `GET /api/etfs?lookback=&startDate=&endDate=`. Success
//! returns the aligned table plus window metadata; failures map onto
//! 400 (contradictory dates), 429 (upstream throttling), or 500.

pub mod api;

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber, honoring `RUST_LOG` with an `info` default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
