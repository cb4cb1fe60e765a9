//! # Netplane Port Binding
//!
//! Agent-based port binding for a software-defined network control plane.
//!
//! ## Purpose
//!
//! Given a logical port that must attach to a host, an ordered catalog of
//! candidate segments (local | flat | vlan | tunnel), and capability
//! snapshots from per-host switching agents, decide:
//!
//! - whether any candidate agent can realize any segment,
//! - which (agent, segment) pair wins,
//! - the resulting VIF attachment parameters and effective MTU.
//!
//! The core is a pure, synchronous decision function over immutable
//! snapshots: no I/O, no internal retries, no shared mutable state. Agent
//! discovery, heartbeat transport, and binding persistence live elsewhere.
//!
//! ## Decision Rules
//!
//! | Segment type | Feasible for an agent iff |
//! |--------------|---------------------------|
//! | local        | agent has at least one bridge mapping |
//! | flat / vlan  | agent bridges the segment's physical network |
//! | tunnel       | agent advertises the encapsulation family |
//!
//! Dead agents are rejected before any capability check. Candidates are
//! evaluated in caller-supplied order and the first feasible pair wins;
//! callers encode priority in the order they pass in.
//!
//! ## Module Structure
//!
//! ```text
//! np-port-binding/
//! ├── domain/          # AgentState, Segment, BindingResult, config, errors
//! ├── algorithms/      # bind() decision engine, resolve_mtu()
//! ├── ports/           # PortBindingApi, AgentRegistry, SegmentCatalog
//! └── service.rs       # PortBindingService wiring ports to the engine
//! ```
//!
//! ## Example
//!
//! ```rust
//! use np_port_binding::{bind, AgentState, DriverConfig, PortId, Segment};
//! use serde_json::json;
//!
//! let agent = AgentState::from_json(json!({
//!     "host": "compute-1",
//!     "alive": true,
//!     "configurations": {
//!         "bridge_mappings": {"physnet1": "br-eth1"},
//!         "tunnel_types": ["vxlan"]
//!     }
//! }))
//! .unwrap();
//!
//! let segments = [Segment::vlan("physnet1", 100).unwrap()];
//! let result = bind(
//!     &PortId::new("port-1"),
//!     &segments,
//!     &[agent],
//!     true,
//!     1500,
//!     &DriverConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(result.host, "compute-1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use algorithms::{bind, resolve_mtu, segment_feasible};
pub use domain::{
    AgentConfigurations, AgentReport, AgentState, BindingError, BindingResult, DriverConfig,
    MtuProfile, PhysnetParams, PortId, Segment, TunnelKind, VifDetails, VifPolicyTable, VifType,
    CAP_PORT_FILTER, DEFAULT_TUNNEL_OVERHEAD, HYBRID_PLUG, MAX_VLAN_ID, PLATFORM_DEFAULT_MTU,
};
pub use ports::{
    AgentRegistry, BindingRequest, InMemoryAgentRegistry, InMemorySegmentCatalog, PortBindingApi,
    SegmentCatalog,
};
pub use service::PortBindingService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
