//! # Port Binding Service
//!
//! High-level service implementing the `PortBindingApi` port.
//!
//! The service is the only place that gathers snapshots: it pulls candidate
//! segments from the catalog and candidate agents from the registry, then
//! delegates to the pure [`bind`](crate::algorithms::bind) decision. All
//! retry and re-poll policy stays with the caller.

use tracing::info;

use crate::algorithms::bind;
use crate::domain::{BindingError, BindingResult, DriverConfig};
use crate::ports::{AgentRegistry, BindingRequest, PortBindingApi, SegmentCatalog};

/// Port binding service wiring configuration and snapshot sources to the
/// decision engine.
pub struct PortBindingService<R, C> {
    config: DriverConfig,
    registry: R,
    catalog: C,
}

impl<R, C> PortBindingService<R, C>
where
    R: AgentRegistry,
    C: SegmentCatalog,
{
    /// Create a service over the given snapshot sources.
    pub fn new(config: DriverConfig, registry: R, catalog: C) -> Self {
        Self {
            config,
            registry,
            catalog,
        }
    }

    /// The configuration this service decides with.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }
}

impl<R, C> PortBindingApi for PortBindingService<R, C>
where
    R: AgentRegistry,
    C: SegmentCatalog,
{
    fn bind_port(&self, request: &BindingRequest) -> Result<BindingResult, BindingError> {
        let segments = self.catalog.segments(&request.network_id);
        let agents = self.registry.agents_for_host(&request.host);

        let result = bind(
            &request.port,
            &segments,
            &agents,
            request.security_groups_enabled,
            request.global_default_mtu,
            &self.config,
        )?;

        info!(
            "[np-binding] port {} bound on host {} (vif {:?}, mtu {})",
            request.port, result.host, result.vif_type, result.mtu
        );
        Ok(result)
    }
}
