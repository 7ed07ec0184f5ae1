#![allow(dead_code)]

// Logging is auto-installed for all test binaries
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}
