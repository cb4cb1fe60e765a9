//! # Domain Value Objects
//!
//! Immutable value types for port binding: segments, VIF attachment
//! parameters, and the binding outcome.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::BindingError;

/// Opaque logical port identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortId(String);

impl PortId {
    /// Create a port identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tunnel encapsulation families supported by the segment catalog.
///
/// Agent reports advertise tunnel types as free-form identifiers; only the
/// identifiers below can appear on a catalog segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TunnelKind {
    /// GRE encapsulation.
    Gre,
    /// VXLAN encapsulation.
    Vxlan,
}

impl TunnelKind {
    /// Wire identifier as agents report it.
    pub fn as_str(&self) -> &'static str {
        match self {
            TunnelKind::Gre => "gre",
            TunnelKind::Vxlan => "vxlan",
        }
    }
}

impl fmt::Display for TunnelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Highest VLAN id usable for tagging (4095 is reserved).
pub const MAX_VLAN_ID: u16 = 4094;

/// One concrete realization of a logical network on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "network_type", rename_all = "lowercase")]
pub enum Segment {
    /// Exists only within a single virtual switch; no physical network.
    Local,
    /// Untagged traffic on a named physical network.
    Flat {
        /// Physical network carrying the segment.
        physical_network: String,
    },
    /// VLAN-tagged traffic on a named physical network.
    Vlan {
        /// Physical network carrying the segment.
        physical_network: String,
        /// 802.1Q tag, 1..=4094.
        vlan_id: u16,
    },
    /// Tunnel-encapsulated traffic; physical network is irrelevant.
    Tunnel {
        /// Encapsulation family.
        kind: TunnelKind,
        /// Tunnel/VNI identifier.
        tunnel_id: u32,
    },
}

impl Segment {
    /// A local segment.
    pub fn local() -> Self {
        Segment::Local
    }

    /// A flat segment on `physical_network`.
    pub fn flat(physical_network: impl Into<String>) -> Self {
        Segment::Flat {
            physical_network: physical_network.into(),
        }
    }

    /// A VLAN segment, validating the tag range.
    pub fn vlan(physical_network: impl Into<String>, vlan_id: u16) -> Result<Self, BindingError> {
        if vlan_id == 0 || vlan_id > MAX_VLAN_ID {
            return Err(BindingError::validation(format!(
                "vlan_id {vlan_id} outside 1..={MAX_VLAN_ID}"
            )));
        }
        Ok(Segment::Vlan {
            physical_network: physical_network.into(),
            vlan_id,
        })
    }

    /// A tunnel segment of the given family.
    pub fn tunnel(kind: TunnelKind, tunnel_id: u32) -> Self {
        Segment::Tunnel { kind, tunnel_id }
    }

    /// The physical network this segment rides on, if any.
    pub fn physical_network(&self) -> Option<&str> {
        match self {
            Segment::Flat { physical_network } | Segment::Vlan {
                physical_network, ..
            } => Some(physical_network),
            Segment::Local | Segment::Tunnel { .. } => None,
        }
    }

    /// The segmentation id (VLAN tag or tunnel id), if any.
    pub fn segmentation_id(&self) -> Option<u32> {
        match self {
            Segment::Vlan { vlan_id, .. } => Some(u32::from(*vlan_id)),
            Segment::Tunnel { tunnel_id, .. } => Some(*tunnel_id),
            Segment::Local | Segment::Flat { .. } => None,
        }
    }

    /// The tunnel family, if this is a tunnel segment.
    pub fn tunnel_kind(&self) -> Option<TunnelKind> {
        match self {
            Segment::Tunnel { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Virtual-interface attachment kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VifType {
    /// Plug into the agent's virtual switch bridge.
    Bridge,
    /// Unbindable sentinel kind.
    Other,
}

impl VifType {
    /// Wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            VifType::Bridge => "bridge",
            VifType::Other => "other",
        }
    }
}

/// Flag name: backend enforces port filtering.
pub const CAP_PORT_FILTER: &str = "port_filter";

/// Flag name: backend requires the hybrid plug strategy.
pub const HYBRID_PLUG: &str = "ovs_hybrid_plug";

/// Backend-specific attachment flags.
///
/// Supplied by configuration and attached unmodified on every successful
/// bind; the engine never computes or edits individual flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VifDetails {
    flags: BTreeMap<String, bool>,
}

impl VifDetails {
    /// Empty flag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a flag, returning self for chaining.
    pub fn with_flag(mut self, name: impl Into<String>, value: bool) -> Self {
        self.flags.insert(name.into(), value);
        self
    }

    /// Read a flag; absent flags read as false.
    pub fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    /// All flags, in name order.
    pub fn flags(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of flags present.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether no flags are present.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

/// Outcome of a successful bind: the selected (agent, segment) pair and the
/// attachment parameters the orchestrator needs.
///
/// Ephemeral; constructed fresh per binding attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingResult {
    /// Attachment kind for the VIF.
    pub vif_type: VifType,
    /// Backend flags, copied unmodified from the policy table.
    pub vif_details: VifDetails,
    /// The segment that was selected.
    pub segment: Segment,
    /// Host of the agent that won the bind.
    pub host: String,
    /// Resolved MTU; 0 means "no constraint imposed".
    pub mtu: u32,
}
