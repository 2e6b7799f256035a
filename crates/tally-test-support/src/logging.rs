//! Tracing setup for tests.

use tracing_subscriber::{EnvFilter, fmt};

/// Default filter when `RUST_LOG` is not provided.
const DEFAULT_TEST_FILTER: &str = "tally_search=debug";

/// Install a test-writer subscriber so `tracing` output lands in captured test logs.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));
    let installed = fmt::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_test_writer()
        .try_init();
    drop(installed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_test_tracing();
        init_test_tracing();
    }
}
