//! # Netplane Test Suite
//!
//! Unified test crate for the port binding subsystem.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── binding/    # Decision-engine scenarios (per network type, ordering,
//! │               # liveness, service flows)
//! └── mtu/        # MTU resolution anchor cases and properties
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p np-tests
//!
//! # By category
//! cargo test -p np-tests binding::
//! cargo test -p np-tests mtu::
//! ```

#![allow(dead_code)]

pub mod mtu;

/// Route subsystem logs through the test writer; safe to call from every
/// test (later calls are no-ops).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
