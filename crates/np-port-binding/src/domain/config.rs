//! # Driver Configuration
//!
//! Explicit configuration values threaded into every call. The core never
//! reads ambient or global mutable state; whoever owns the deployment config
//! constructs one of these and passes it in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::value_objects::{TunnelKind, VifDetails, CAP_PORT_FILTER, HYBRID_PLUG};

/// Platform default MTU, used when a segment is untunneled and no
/// physical-network override applies.
pub const PLATFORM_DEFAULT_MTU: u32 = 1500;

/// Default per-encapsulation overhead in bytes, for the tunnel families in
/// scope. Deployments with larger headers override it per kind.
pub const DEFAULT_TUNNEL_OVERHEAD: u32 = 100;

/// MTU arithmetic parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MtuProfile {
    /// Fallback MTU for untunneled segments without an override.
    pub platform_default_mtu: u32,
    /// Bytes consumed by encapsulation headers, per tunnel family.
    pub tunnel_overhead: BTreeMap<TunnelKind, u32>,
}

impl MtuProfile {
    /// Overhead for one tunnel family.
    pub fn overhead(&self, kind: TunnelKind) -> u32 {
        self.tunnel_overhead
            .get(&kind)
            .copied()
            .unwrap_or(DEFAULT_TUNNEL_OVERHEAD)
    }
}

impl Default for MtuProfile {
    fn default() -> Self {
        let mut tunnel_overhead = BTreeMap::new();
        tunnel_overhead.insert(TunnelKind::Gre, DEFAULT_TUNNEL_OVERHEAD);
        tunnel_overhead.insert(TunnelKind::Vxlan, DEFAULT_TUNNEL_OVERHEAD);
        Self {
            platform_default_mtu: PLATFORM_DEFAULT_MTU,
            tunnel_overhead,
        }
    }
}

/// The two-row VIF details table, keyed only on whether security groups are
/// enabled. A backend plugs in its own rows without touching the matching
/// algorithm.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VifPolicyTable {
    /// Flags attached when security groups are enabled.
    pub enabled: VifDetails,
    /// Flags attached when security groups are disabled.
    pub disabled: VifDetails,
}

impl VifPolicyTable {
    /// Row for the given security-groups setting.
    pub fn for_security_groups(&self, enabled: bool) -> &VifDetails {
        if enabled {
            &self.enabled
        } else {
            &self.disabled
        }
    }
}

impl Default for VifPolicyTable {
    fn default() -> Self {
        Self {
            enabled: VifDetails::new()
                .with_flag(CAP_PORT_FILTER, true)
                .with_flag(HYBRID_PLUG, true),
            disabled: VifDetails::new()
                .with_flag(CAP_PORT_FILTER, false)
                .with_flag(HYBRID_PLUG, false),
        }
    }
}

/// Everything the decision engine consumes from the deployment config.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// MTU arithmetic parameters.
    pub mtu: MtuProfile,
    /// VIF details policy.
    pub vif_policy: VifPolicyTable,
}
