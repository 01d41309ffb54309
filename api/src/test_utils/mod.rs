//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - Manual mocks are more explicit and easier to debug
//! - Call counts and captured arguments are plain fields, no macro magic
//! - The repository port is small enough that a hand-written double stays
//!   cheaper than framework setup


pub use fixtures::*;
pub use mocks::*;

/// Install a tracing subscriber for tests; safe to call more than once
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = crate::config::Config::from_env().log_filter;
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}
