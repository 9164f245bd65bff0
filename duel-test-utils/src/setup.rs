use std::sync::Once;

static INIT: Once = Once::new();

/// Routes battle debug logging to the test output.
///
/// Safe to call from every test; the subscriber is installed once per process.
pub fn setup_test_environment() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing_core::Level::DEBUG)
            .with_file(true)
            .with_line_number(true)
            .with_test_writer()
            .init();
    });
}
