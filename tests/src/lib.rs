//! # Quill Test Suite
//!
//! Unified test crate for cross-subsystem choreography.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-subsystem flows over a real event bus
//!     └── flows.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p quill-tests
//!
//! # By category
//! cargo test -p quill-tests integration::
//! ```

pub mod integration;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize tracing once for the whole suite.
///
/// Respects `RUST_LOG`; defaults to silent so test output stays readable.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
