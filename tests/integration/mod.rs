//! Integration tests exercising the public API end to end.

pub mod config_test;
pub mod registry_test;

use tracing_subscriber::EnvFilter;

/// Installs a test-friendly subscriber once per test binary.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}
