//! # Prior-Chain Test Suite
//!
//! Unified test crate for cross-cutting behavior:
//!
//! ```text
//! tests/src/
//! └── integration/      # End-to-end registry scenarios
//!     ├── filing_flows.rs
//!     └── stress.rs
//! ```
//!
//! Per-module unit tests live next to the code they cover inside each crate;
//! this crate holds the scenarios that exercise the public surface the way a
//! deployment would.
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p pr-tests
//!
//! # By category
//! cargo test -p pr-tests integration::
//! ```

#![allow(dead_code)]


use std::sync::Once;

static INIT: Once = Once::new();

/// Install the tracing subscriber once for the whole suite. Honors
/// `RUST_LOG`; silent by default.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
