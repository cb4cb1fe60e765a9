//! # Inbound Ports
//!
//! The in-process call contract a port-binding orchestrator consumes.

use serde::{Deserialize, Serialize};

use crate::domain::{BindingError, BindingResult, PortId};

/// One binding attempt: which port, on which host, against which network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingRequest {
    /// The port to bind.
    pub port: PortId,
    /// Logical network whose segment catalog supplies the candidates.
    pub network_id: String,
    /// Host the port must be realized on.
    pub host: String,
    /// Whether the deployment runs with security groups enabled.
    pub security_groups_enabled: bool,
    /// Global default MTU; 0 means "impose no MTU constraint".
    pub global_default_mtu: u32,
}

/// Port binding API - inbound port.
///
/// Synchronous by design: binding is a pure decision over snapshots the
/// implementation gathers, with no I/O of its own.
pub trait PortBindingApi: Send + Sync {
    /// Decide a binding for the request, or fail with a typed error.
    fn bind_port(&self, request: &BindingRequest) -> Result<BindingResult, BindingError>;
}
