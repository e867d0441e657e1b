//! Small shared utilities: wall-clock sampling and logger setup.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in microseconds since the Unix epoch.
///
/// Timestamps are per-call samples and are not guaranteed monotonic
/// across threads.
#[must_use]
pub fn current_time_micros() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_micros() as u64
}

/// Installs a global `tracing` subscriber honoring `RUST_LOG`, with an
/// `info` default. Safe to call more than once; later calls are no-ops.
pub fn setup_logger() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
