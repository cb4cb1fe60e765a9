//! # Algorithms Module
//!
//! Pure decision logic: segment matching and MTU arithmetic.

pub mod binding;
pub mod mtu;

pub use binding::{bind, segment_feasible};
pub use mtu::resolve_mtu;
