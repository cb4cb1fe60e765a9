//! # Binding Decision Engine
//!
//! Matches a port against candidate (agent, segment) pairs. Pure and
//! deterministic: identical inputs always yield the identical result, and
//! caller-supplied order is the only priority mechanism.

use tracing::{debug, trace};

use super::mtu::resolve_mtu;
use crate::domain::{
    invariant_live_agent, invariant_switching_endpoint, AgentState, BindingError, BindingResult,
    DriverConfig, PortId, Segment, VifType,
};

/// Can `agent` realize `segment`?
///
/// - `Local` needs a configured switching endpoint but no physical network
///   match (local segments exist only within one virtual switch).
/// - `Flat`/`Vlan` need a bridge mapping for the segment's physical network.
/// - `Tunnel` needs the encapsulation advertised; physnet is irrelevant.
///
/// An agent with empty bridge mappings and empty tunnel types matches
/// nothing.
pub fn segment_feasible(agent: &AgentState, segment: &Segment) -> bool {
    match segment {
        Segment::Local => invariant_switching_endpoint(agent),
        Segment::Flat { physical_network } | Segment::Vlan {
            physical_network, ..
        } => agent.supports_physical_network(physical_network),
        Segment::Tunnel { kind, .. } => agent.supports_tunnel_type(*kind),
    }
}

/// Bind `port` to the first feasible (agent, segment) pair.
///
/// Agents are tried in caller order; for each live agent, segments are tried
/// in caller order and the first feasible one wins. Dead agents are rejected
/// before any capability check. On success the VIF details row is taken from
/// the policy table keyed only on `security_groups_enabled` and attached
/// unmodified, and the MTU is delegated to [`resolve_mtu`].
///
/// Exhausting every candidate yields [`BindingError::NoFeasibleAgent`];
/// configuration errors from MTU resolution are fatal and propagate
/// immediately.
pub fn bind(
    port: &PortId,
    segments: &[Segment],
    agents: &[AgentState],
    security_groups_enabled: bool,
    global_default_mtu: u32,
    config: &DriverConfig,
) -> Result<BindingResult, BindingError> {
    for agent in agents {
        if !invariant_live_agent(agent) {
            debug!(
                "[np-binding] agent on {} is dead, skipping for port {}",
                agent.host(),
                port
            );
            continue;
        }

        for segment in segments {
            if !segment_feasible(agent, segment) {
                trace!(
                    "[np-binding] segment {:?} infeasible for agent on {}",
                    segment,
                    agent.host()
                );
                continue;
            }

            let mtu = resolve_mtu(agent, segment, global_default_mtu, &config.mtu)?;
            let vif_details = config
                .vif_policy
                .for_security_groups(security_groups_enabled)
                .clone();

            debug!(
                "[np-binding] bound port {} to {:?} on host {} (mtu {})",
                port,
                segment,
                agent.host(),
                mtu
            );
            return Ok(BindingResult {
                vif_type: VifType::Bridge,
                vif_details,
                segment: segment.clone(),
                host: agent.host().to_string(),
                mtu,
            });
        }

        debug!(
            "[np-binding] no feasible segment for agent on {}, trying next candidate",
            agent.host()
        );
    }

    Err(BindingError::NoFeasibleAgent {
        port: port.to_string(),
    })
}
