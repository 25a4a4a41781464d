use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// `RUST_LOG` wins; otherwise use `fallback`.
fn filter_or(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Human-readable single-line output for local runs.
/// Without `RUST_LOG`, request spans from tower_http/axum show at info.
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(filter_or("info,tower_http=info,axum=info"))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// One JSON object per event, with the emitting module as `target`.
/// Without `RUST_LOG`, the user store's create/update events are included.
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(filter_or("info,service=debug"))
        .with_target(true)
        .json()
        .with_writer(io::stdout)
        .try_init();
}
