//! Shared setup for the integration test binaries

use tracing_subscriber::EnvFilter;

/// Install a test-friendly subscriber once per test binary. `RUST_LOG=fwi_core=trace` shows
/// every computed day.
#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
