//! Logging setup for tests and demos.

use std::sync::Once;

use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Installs a global `tracing` subscriber once. The filter comes from
/// `RUST_LOG`, falling back to `default_filter`.
pub fn init_logging(default_filter: &str) {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(env_filter),
        );
        if tracing::dispatcher::has_been_set() {
            debug!("tracing subscriber already set");
        } else if let Err(e) = subscriber.try_init() {
            eprintln!("Error: failed to set up logging: {e}");
        }
    });
}

/// Verbose logging for tests; `RUST_LOG` still wins when set.
pub fn init_test_setup() {
    init_logging("trace");
}
