//! # MTU Resolution Scenarios
//!
//! The numeric contract the resolver must hold bit-exactly, expressed as an
//! anchor-case table plus the sentinel and idempotence properties.

#[cfg(test)]
mod tests {
    use np_port_binding::{
        bind, resolve_mtu, AgentState, DriverConfig, MtuProfile, PortId, Segment, TunnelKind,
    };
    use serde_json::json;

    use crate::init_tracing;

    fn agent(configurations: serde_json::Value) -> AgentState {
        AgentState::from_json(json!({
            "host": "compute-1",
            "alive": true,
            "configurations": configurations
        }))
        .unwrap()
    }

    #[test]
    fn test_anchor_cases() {
        let profile = MtuProfile::default();
        struct Case {
            name: &'static str,
            configurations: serde_json::Value,
            segment: Segment,
            global_default: u32,
            expected: u32,
        }
        let cases = [
            Case {
                name: "override applies to flat",
                configurations: json!({
                    "bridge_mappings": {"physnet1": "br-eth1"},
                    "tunnel_types": [],
                    "physnet_params": {"physnet1": {"mtu": "1450"}}
                }),
                segment: Segment::flat("physnet1"),
                global_default: 1500,
                expected: 1450,
            },
            Case {
                name: "override applies to vlan",
                configurations: json!({
                    "bridge_mappings": {"physnet1": "br-eth1"},
                    "tunnel_types": [],
                    "physnet_params": {"physnet1": {"mtu": 1450}}
                }),
                segment: Segment::vlan("physnet1", 100).unwrap(),
                global_default: 1500,
                expected: 1450,
            },
            Case {
                name: "tunnel subtracts overhead from override",
                configurations: json!({
                    "bridge_mappings": {"physnet1": "br-eth1"},
                    "tunnel_types": ["vxlan", "gre"],
                    "physnet_params": {"physnet1": {"mtu": "1450"}}
                }),
                segment: Segment::tunnel(TunnelKind::Vxlan, 5001),
                global_default: 1500,
                expected: 1350,
            },
            Case {
                name: "tunnel subtracts overhead from global default",
                configurations: json!({
                    "bridge_mappings": {"physnet1": "br-eth1"},
                    "tunnel_types": ["gre"]
                }),
                segment: Segment::tunnel(TunnelKind::Gre, 7),
                global_default: 1500,
                expected: 1400,
            },
            Case {
                name: "no override and untunneled falls back to platform default",
                configurations: json!({
                    "bridge_mappings": {"physnet1": "br-eth1"},
                    "tunnel_types": [],
                    "physnet_params": {}
                }),
                segment: Segment::flat("physnet1"),
                global_default: 1500,
                expected: 1500,
            },
            Case {
                name: "zero global default is never adjusted",
                configurations: json!({
                    "bridge_mappings": {"physnet1": "br-eth1"},
                    "tunnel_types": ["vxlan"],
                    "physnet_params": {"physnet1": {"mtu": 1450}}
                }),
                segment: Segment::tunnel(TunnelKind::Vxlan, 5001),
                global_default: 0,
                expected: 0,
            },
        ];

        for case in cases {
            let got = resolve_mtu(
                &agent(case.configurations),
                &case.segment,
                case.global_default,
                &profile,
            )
            .unwrap_or_else(|e| panic!("{}: {e}", case.name));
            assert_eq!(got, case.expected, "{}", case.name);
        }
    }

    #[test]
    fn test_resolver_is_idempotent() {
        let agent = agent(json!({
            "bridge_mappings": {"physnet1": "br-eth1"},
            "tunnel_types": ["gre"],
            "physnet_params": {"physnet1": {"mtu": 1450}}
        }));
        let profile = MtuProfile::default();
        let segment = Segment::tunnel(TunnelKind::Gre, 7);
        assert_eq!(
            resolve_mtu(&agent, &segment, 1500, &profile).unwrap(),
            resolve_mtu(&agent, &segment, 1500, &profile).unwrap(),
        );
    }

    #[test]
    fn test_bound_result_carries_resolved_mtu() {
        init_tracing();
        let agent = agent(json!({
            "bridge_mappings": {"physnet1": "br-eth1"},
            "tunnel_types": ["vxlan"],
            "physnet_params": {"physnet1": {"mtu": 1450}}
        }));
        let segments = [Segment::tunnel(TunnelKind::Vxlan, 5001)];
        let result = bind(
            &PortId::new("port-1"),
            &segments,
            std::slice::from_ref(&agent),
            true,
            1500,
            &DriverConfig::default(),
        )
        .unwrap();
        assert_eq!(result.mtu, 1350);

        // Unconstrained deployments propagate the sentinel through bind too.
        let result = bind(
            &PortId::new("port-1"),
            &segments,
            std::slice::from_ref(&agent),
            true,
            0,
            &DriverConfig::default(),
        )
        .unwrap();
        assert_eq!(result.mtu, 0);
    }
}
