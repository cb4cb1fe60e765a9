//! # Domain Errors
//!
//! Error types for the port binding subsystem.

use thiserror::Error;

/// Port binding error types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BindingError {
    /// Malformed agent report or segment parameters.
    ///
    /// Raised once at construction time; the matching loop never re-validates.
    #[error("Validation failed: {reason}")]
    Validation {
        /// What was malformed.
        reason: String,
    },

    /// Every candidate agent was rejected (dead, or no segment matched).
    ///
    /// The caller decides whether to retry with a fresh candidate set.
    #[error("No feasible agent for port {port}")]
    NoFeasibleAgent {
        /// The port that could not be bound.
        port: String,
    },

    /// Operator misconfiguration (non-positive MTU override, overhead that
    /// exceeds the base MTU). Fatal, never retried.
    #[error("Configuration error: {reason}")]
    Configuration {
        /// What is misconfigured.
        reason: String,
    },
}

impl BindingError {
    /// Shorthand for a validation error.
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    /// Shorthand for a configuration error.
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }
}
