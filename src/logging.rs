//! Logging initialization.
//!
//! The library only emits `tracing` events. Binaries and test suites that want
//! to see them call [`init`] once.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Logging profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output on stdout
    Development,
    /// Output routed through the test harness so it is captured per test
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Install a `tracing-subscriber` fmt subscriber.
///
/// `RUST_LOG` overrides the default `fieldwise=debug` filter. Only the first
/// call has any effect, and an already-installed global subscriber is left alone.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fieldwise=debug"));

        let result = match profile {
            Profile::Development => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
            Profile::Test => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_test_writer()
                .try_init(),
        };

        if let Err(err) = result {
            tracing::debug!("tracing subscriber already installed: {}", err);
        }
    });
}
