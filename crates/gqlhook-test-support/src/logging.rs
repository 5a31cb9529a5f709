//! Tracing subscriber for test runs.

use tracing_subscriber::{EnvFilter, fmt};

/// Default filter when `RUST_LOG` is not provided.
const DEFAULT_TEST_LOG_LEVEL: &str = "debug";

/// Install a fmt subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_LOG_LEVEL));
    // Later calls find the global subscriber already set; that error is expected.
    fmt::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .with_target(false)
        .try_init()
        .ok();
}
