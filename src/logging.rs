//! Tracing setup for binaries.
//!
//! The library only emits events; installing a subscriber is left to the
//! program embedding it.

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when neither `RUST_LOG` nor a level is given.
pub const DEFAULT_FILTER: &str = "party_draw=info";

/// Build the filter: `RUST_LOG` wins, then `level`, then `DEFAULT_FILTER`.
#[must_use]
pub fn env_filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match level {
        Some(level) => EnvFilter::new(format!("party_draw={level}")),
        None => EnvFilter::new(DEFAULT_FILTER),
    })
}

/// Install a stderr fmt subscriber. Safe to call more than once.
pub fn init_tracing(level: Option<&str>) {
    let _ = fmt()
        .with_env_filter(env_filter(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
