//! # MTU Resolution
//!
//! Combines the global default, per-physical-network agent overrides, and
//! per-encapsulation overhead into the effective MTU for a bound segment.

use crate::domain::{
    invariant_overhead_fits, AgentState, BindingError, MtuProfile, Segment,
};

/// Resolve the effective MTU for `segment` as realized by `agent`.
///
/// Precedence:
/// 1. `global_default_mtu == 0` is the "no constraint" sentinel and is
///    returned unchanged, never adjusted.
/// 2. A positive per-physical-network override from the agent report beats
///    the global default as the base.
/// 3. Tunnel segments subtract the per-family encapsulation overhead from
///    the base.
/// 4. Untunneled segments without an override fall back to the platform
///    default, not the global default.
///
/// Pure and idempotent. An explicit zero override, or an overhead that does
/// not fit in the base, is operator misconfiguration and fails with
/// [`BindingError::Configuration`].
pub fn resolve_mtu(
    agent: &AgentState,
    segment: &Segment,
    global_default_mtu: u32,
    profile: &MtuProfile,
) -> Result<u32, BindingError> {
    if global_default_mtu == 0 {
        return Ok(0);
    }

    let override_mtu = physnet_override(agent, segment)?;

    if let Some(kind) = segment.tunnel_kind() {
        let base = override_mtu.unwrap_or(global_default_mtu);
        let overhead = profile.overhead(kind);
        invariant_overhead_fits(base, overhead)?;
        return Ok(base - overhead);
    }

    Ok(override_mtu.unwrap_or(profile.platform_default_mtu))
}

/// The physical-network MTU override constraining this segment, if any.
///
/// Flat and VLAN segments read the override for their own physical network.
/// Tunnel and local segments have none, so the tightest override among the
/// physical networks the agent actually bridges bounds the underlay path.
fn physnet_override(agent: &AgentState, segment: &Segment) -> Result<Option<u32>, BindingError> {
    match segment.physical_network() {
        Some(physnet) => checked(agent.physnet_mtu(physnet), physnet),
        None => agent
            .bridge_mappings()
            .keys()
            .filter_map(|physnet| checked(agent.physnet_mtu(physnet), physnet).transpose())
            .try_fold(None::<u32>, |best, next| {
                let next = next?;
                Ok(Some(best.map_or(next, |b| b.min(next))))
            }),
    }
}

fn checked(mtu: Option<u32>, physnet: &str) -> Result<Option<u32>, BindingError> {
    match mtu {
        Some(0) => Err(BindingError::configuration(format!(
            "physnet {physnet} reports a non-positive MTU override"
        ))),
        other => Ok(other),
    }
}
