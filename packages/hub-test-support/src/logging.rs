//! One-time tracing setup shared by unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per test binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, else `warn`. Output goes
/// through the test writer so it is captured per test. Calling this again,
/// or after another subscriber won, is harmless.
pub fn init() {
    INSTALLED.get_or_init(|| {
        let directives = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "warn".to_string());

        let _ = fmt()
            .with_env_filter(EnvFilter::new(directives))
            .with_test_writer()
            .without_time()
            .try_init();
    });
}
