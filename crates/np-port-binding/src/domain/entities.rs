//! # Domain Entities
//!
//! The agent capability model: the wire-form heartbeat report and the
//! validated snapshot the decision engine consumes.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer};

use super::errors::BindingError;
use super::value_objects::TunnelKind;

/// Per-physical-network parameter bag from an agent report.
///
/// `mtu` is the only parameter this core consumes. Agents encode it either as
/// a JSON number or a numeric string depending on agent version, so both are
/// accepted at the wire boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PhysnetParams {
    /// MTU override for the physical network, if reported.
    #[serde(default, deserialize_with = "deserialize_mtu")]
    pub mtu: Option<u32>,
}

fn deserialize_mtu<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawMtu {
        Number(u64),
        Text(String),
    }

    match Option::<RawMtu>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawMtu::Number(n)) => u32::try_from(n)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("mtu {n} out of range"))),
        Some(RawMtu::Text(s)) => s
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("mtu is not a number: {s:?}"))),
    }
}

/// The `configurations` object of an agent heartbeat report.
///
/// Every sub-key is optional on the wire; an agent that reports nothing gets
/// empty mappings, which is valid (no physical networks attached).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AgentConfigurations {
    /// Physical network name -> local bridge/interface name.
    #[serde(default)]
    pub bridge_mappings: BTreeMap<String, String>,
    /// Tunnel encapsulation identifiers the agent supports.
    #[serde(default)]
    pub tunnel_types: BTreeSet<String>,
    /// Physical network name -> parameter bag.
    #[serde(default)]
    pub physnet_params: BTreeMap<String, PhysnetParams>,
}

/// Wire form of one agent's self-reported state.
///
/// This is the untrusted shape; convert to [`AgentState`] before use. Type
/// mismatches (e.g. `bridge_mappings` that is not a mapping) fail here, at
/// the deserialization boundary, never inside the matching loop.
#[derive(Clone, Debug, Deserialize)]
pub struct AgentReport {
    /// Host the agent runs on.
    pub host: String,
    /// Liveness verdict from the heartbeat subsystem.
    pub alive: bool,
    /// Capability payload.
    #[serde(default)]
    pub configurations: AgentConfigurations,
}

/// Validated view of one agent's capability snapshot.
///
/// Pure data holder plus query operations; never mutates its backing
/// snapshot. `bridge_mappings` and `physnet_params` keys are independent
/// namespaces: a physical network present in only one of them simply has no
/// MTU override available.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentState {
    host: String,
    alive: bool,
    bridge_mappings: BTreeMap<String, String>,
    tunnel_types: BTreeSet<String>,
    physnet_params: BTreeMap<String, PhysnetParams>,
}

impl AgentState {
    /// Build a snapshot from already-materialized parts.
    pub fn new(
        host: impl Into<String>,
        alive: bool,
        bridge_mappings: BTreeMap<String, String>,
        tunnel_types: BTreeSet<String>,
        physnet_params: BTreeMap<String, PhysnetParams>,
    ) -> Result<Self, BindingError> {
        let host = host.into();
        if host.is_empty() {
            return Err(BindingError::validation("agent host is empty"));
        }
        Ok(Self {
            host,
            alive,
            bridge_mappings,
            tunnel_types,
            physnet_params,
        })
    }

    /// Parse and validate a raw heartbeat payload.
    pub fn from_json(value: serde_json::Value) -> Result<Self, BindingError> {
        let report: AgentReport = serde_json::from_value(value)
            .map_err(|e| BindingError::validation(format!("malformed agent report: {e}")))?;
        Self::try_from(report)
    }

    /// Host the agent runs on.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Whether the last heartbeat was within the freshness window.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// True iff the agent bridges the named physical network.
    pub fn supports_physical_network(&self, physnet: &str) -> bool {
        self.bridge_mappings.contains_key(physnet)
    }

    /// True iff the agent advertises the tunnel encapsulation.
    pub fn supports_tunnel_type(&self, kind: TunnelKind) -> bool {
        self.tunnel_types.contains(kind.as_str())
    }

    /// True iff the agent is a configured switching endpoint (has at least
    /// one bridge mapping).
    pub fn has_bridge_mappings(&self) -> bool {
        !self.bridge_mappings.is_empty()
    }

    /// Physical networks the agent bridges, with their local bridge names.
    pub fn bridge_mappings(&self) -> &BTreeMap<String, String> {
        &self.bridge_mappings
    }

    /// MTU override reported for a physical network, if any.
    pub fn physnet_mtu(&self, physnet: &str) -> Option<u32> {
        self.physnet_params.get(physnet).and_then(|p| p.mtu)
    }
}

impl TryFrom<AgentReport> for AgentState {
    type Error = BindingError;

    fn try_from(report: AgentReport) -> Result<Self, Self::Error> {
        Self::new(
            report.host,
            report.alive,
            report.configurations.bridge_mappings,
            report.configurations.tunnel_types,
            report.configurations.physnet_params,
        )
    }
}
