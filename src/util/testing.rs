use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// One-time tracing init shared by all tests. Safe to call repeatedly.
pub fn init_test_setup() {
    TEST_SETUP.call_once(setup_test_logging);
}

fn setup_test_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(env_filter),
    );

    if subscriber.try_init().is_err() {
        tracing::debug!("tracing subscriber already set");
    }
}
