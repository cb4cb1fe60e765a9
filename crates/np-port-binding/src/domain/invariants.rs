//! # Domain Invariants
//!
//! Gates the decision engine applies, kept as small free functions so the
//! rules stay independently testable.

use super::entities::AgentState;
use super::errors::BindingError;

/// Invariant: dead agents are never eligible.
///
/// Checked before any capability matching; a dead agent with
/// otherwise-perfect mappings must not bind.
pub fn invariant_live_agent(agent: &AgentState) -> bool {
    agent.is_alive()
}

/// Invariant: local segments still require a configured switching endpoint.
///
/// An agent with zero bridge mappings is indistinguishable from a
/// misconfigured one and must not be selected, even for `local`.
pub fn invariant_switching_endpoint(agent: &AgentState) -> bool {
    agent.has_bridge_mappings()
}

/// Invariant: encapsulation overhead must fit inside the base MTU.
///
/// A base at or below the overhead is operator misconfiguration, surfaced
/// immediately rather than clamped.
pub fn invariant_overhead_fits(base: u32, overhead: u32) -> Result<(), BindingError> {
    if overhead >= base {
        return Err(BindingError::configuration(format!(
            "tunnel overhead {overhead} does not fit in base MTU {base}"
        )));
    }
    Ok(())
}
