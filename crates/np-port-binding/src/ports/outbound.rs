//! # Outbound Ports
//!
//! Driven ports supplying the snapshots the engine decides over: agent
//! capability reports from the heartbeat subsystem and the segment catalog
//! from the network service. In-memory implementations are provided for
//! tests and single-process deployments.

use std::collections::BTreeMap;

use crate::domain::{AgentState, Segment};

/// Source of agent capability snapshots.
pub trait AgentRegistry: Send + Sync {
    /// Candidate agents on `host`, in selection-priority order.
    ///
    /// Liveness is part of the snapshot; dead agents may be included and the
    /// engine will reject them.
    fn agents_for_host(&self, host: &str) -> Vec<AgentState>;
}

/// Source of candidate segments per logical network.
pub trait SegmentCatalog: Send + Sync {
    /// Candidate segments for `network_id`, in selection-priority order.
    fn segments(&self, network_id: &str) -> Vec<Segment>;
}

/// In-memory agent registry backed by a flat snapshot list.
#[derive(Clone, Debug, Default)]
pub struct InMemoryAgentRegistry {
    agents: Vec<AgentState>,
}

impl InMemoryAgentRegistry {
    /// Registry over the given snapshots.
    pub fn new(agents: Vec<AgentState>) -> Self {
        Self { agents }
    }
}

impl AgentRegistry for InMemoryAgentRegistry {
    fn agents_for_host(&self, host: &str) -> Vec<AgentState> {
        self.agents
            .iter()
            .filter(|a| a.host() == host)
            .cloned()
            .collect()
    }
}

/// In-memory segment catalog keyed by network id.
#[derive(Clone, Debug, Default)]
pub struct InMemorySegmentCatalog {
    by_network: BTreeMap<String, Vec<Segment>>,
}

impl InMemorySegmentCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the candidate segments for one network, in priority order.
    pub fn insert(&mut self, network_id: impl Into<String>, segments: Vec<Segment>) {
        self.by_network.insert(network_id.into(), segments);
    }
}

impl SegmentCatalog for InMemorySegmentCatalog {
    fn segments(&self, network_id: &str) -> Vec<Segment> {
        self.by_network.get(network_id).cloned().unwrap_or_default()
    }
}
