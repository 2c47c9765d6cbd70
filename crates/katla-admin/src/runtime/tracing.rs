//! Subscriber setup for the admin binary.
//!
//! Events use structured fields rather than formatted strings:
//!
//! ```text
//! INFO Store started record_type="HiveRecord"
//! INFO Created kind="hive" id=hive_1 code="H1"
//! WARN Code in use kind="hive" code="H1" owner=hive_1
//! INFO Purged kind="hive" id=hive_1
//! ```
//!
//! `RUST_LOG` wins over the configured default (`RUST_LOG=debug` also shows every
//! store request and the request payloads of create/update).

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. Call once, from `main`.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
