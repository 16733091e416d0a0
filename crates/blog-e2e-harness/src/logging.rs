// crates/blog-e2e-harness/src/logging.rs
// ============================================================================
// Module: Harness Logging
// Description: Tracing subscriber setup for end-to-end test runs.
// Purpose: Route harness events to the libtest-captured writer.
// Dependencies: tracing-subscriber
// ============================================================================

//! ## Overview
//! Installs a `tracing-subscriber` fmt layer filtered by `RUST_LOG`
//! (default `info`). Output goes through the test writer so libtest only
//! shows it for failing tests. Installing twice is a no-op.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber once; later calls do nothing.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
}
