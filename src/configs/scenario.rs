use serde::Deserialize;

use crate::{
    error::Result,
    scenarios::{
        self, Scenario, SpotGroup, DEBUG_NODES, DEFAULT_HOMOGENEOUS_BANDWIDTH_GBPS,
        DEFAULT_HOMOGENEOUS_DELAY_MS, DEFAULT_NODES,
    },
    topology::Topology,
};

/// A scenario together with every parameter it is generated with.
///
/// Parsed from JSON such as `{"scenario": "spot_datacenter", "nodes": 32}`;
/// omitted fields take the scenario's defaults.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "scenario", rename_all = "snake_case", deny_unknown_fields)]
pub enum ScenarioConfig {
    Datacenter {
        #[serde(default = "default_nodes")]
        nodes: usize,
    },
    SpotDatacenter {
        #[serde(default = "default_nodes")]
        nodes: usize,
        #[serde(default = "default_instance_count")]
        instance_count: usize,
        #[serde(default = "default_gpu_per_instance")]
        gpu_per_instance: usize,
    },
    MultiUniversities {
        #[serde(default = "default_nodes")]
        nodes: usize,
    },
    Regional {
        #[serde(default = "default_nodes")]
        nodes: usize,
    },
    Worldwide {
        #[serde(default = "default_nodes")]
        nodes: usize,
    },
    Homogeneous {
        #[serde(default = "default_nodes")]
        nodes: usize,
        #[serde(default = "default_delay_ms")]
        delay_ms: f64,
        #[serde(default = "default_bandwidth_gbps")]
        bandwidth_gbps: f64,
    },
    Debug {
        #[serde(default = "default_debug_nodes")]
        nodes: usize,
    },
}

impl ScenarioConfig {
    /// Parses a config from its JSON representation.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Returns the scenario this config generates.
    pub fn scenario(&self) -> Scenario {
        match self {
            Self::Datacenter { .. } => Scenario::Datacenter,
            Self::SpotDatacenter { .. } => Scenario::SpotDatacenter,
            Self::MultiUniversities { .. } => Scenario::MultiUniversities,
            Self::Regional { .. } => Scenario::RegionalGeoDistributed,
            Self::Worldwide { .. } => Scenario::WorldwideGeoDistributed,
            Self::Homogeneous { .. } => Scenario::Homogeneous,
            Self::Debug { .. } => Scenario::Debug,
        }
    }

    /// Returns the amount of nodes this config generates.
    pub fn nodes(&self) -> usize {
        match *self {
            Self::Datacenter { nodes }
            | Self::SpotDatacenter { nodes, .. }
            | Self::MultiUniversities { nodes }
            | Self::Regional { nodes }
            | Self::Worldwide { nodes }
            | Self::Homogeneous { nodes, .. }
            | Self::Debug { nodes } => nodes,
        }
    }

    /// Returns this config with its node count replaced.
    pub fn with_nodes(mut self, count: usize) -> Self {
        match &mut self {
            Self::Datacenter { nodes }
            | Self::SpotDatacenter { nodes, .. }
            | Self::MultiUniversities { nodes }
            | Self::Regional { nodes }
            | Self::Worldwide { nodes }
            | Self::Homogeneous { nodes, .. }
            | Self::Debug { nodes } => *nodes = count,
        }
        self
    }

    /// Generates the topology described by this config.
    pub fn generate(&self) -> Result<Topology> {
        match *self {
            Self::Datacenter { nodes } => scenarios::simulate_datacenter(nodes),
            Self::SpotDatacenter {
                nodes,
                instance_count,
                gpu_per_instance,
            } => scenarios::simulate_spot_datacenter(
                nodes,
                SpotGroup {
                    instance_count,
                    gpu_per_instance,
                },
            ),
            Self::MultiUniversities { nodes } => scenarios::simulate_multi_universities(nodes),
            Self::Regional { nodes } => scenarios::simulate_regional_geo_distributed(nodes),
            Self::Worldwide { nodes } => scenarios::simulate_worldwide_geo_distributed(nodes),
            Self::Homogeneous {
                nodes,
                delay_ms,
                bandwidth_gbps,
            } => scenarios::simulate_homogeneous(nodes, delay_ms, bandwidth_gbps),
            Self::Debug { nodes } => scenarios::simulate_debug(nodes),
        }
    }
}

impl From<Scenario> for ScenarioConfig {
    /// The scenario with every parameter at its default.
    fn from(scenario: Scenario) -> Self {
        let nodes = scenario.default_nodes();
        match scenario {
            Scenario::Datacenter => Self::Datacenter { nodes },
            Scenario::SpotDatacenter => {
                let group = SpotGroup::default();
                Self::SpotDatacenter {
                    nodes,
                    instance_count: group.instance_count,
                    gpu_per_instance: group.gpu_per_instance,
                }
            }
            Scenario::MultiUniversities => Self::MultiUniversities { nodes },
            Scenario::RegionalGeoDistributed => Self::Regional { nodes },
            Scenario::WorldwideGeoDistributed => Self::Worldwide { nodes },
            Scenario::Homogeneous => Self::Homogeneous {
                nodes,
                delay_ms: DEFAULT_HOMOGENEOUS_DELAY_MS,
                bandwidth_gbps: DEFAULT_HOMOGENEOUS_BANDWIDTH_GBPS,
            },
            Scenario::Debug => Self::Debug { nodes },
        }
    }
}

fn default_nodes() -> usize {
    DEFAULT_NODES
}

fn default_debug_nodes() -> usize {
    DEBUG_NODES
}

fn default_instance_count() -> usize {
    SpotGroup::default().instance_count
}

fn default_gpu_per_instance() -> usize {
    SpotGroup::default().gpu_per_instance
}

fn default_delay_ms() -> f64 {
    DEFAULT_HOMOGENEOUS_DELAY_MS
}

fn default_bandwidth_gbps() -> f64 {
    DEFAULT_HOMOGENEOUS_BANDWIDTH_GBPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = ScenarioConfig::from_json(r#"{"scenario": "spot_datacenter"}"#).unwrap();
        assert_eq!(config, ScenarioConfig::from(Scenario::SpotDatacenter));

        let config = ScenarioConfig::from_json(r#"{"scenario": "debug"}"#).unwrap();
        assert_eq!(config.nodes(), DEBUG_NODES);
    }

    #[test]
    fn parses_every_field() {
        let json = r#"{"scenario": "homogeneous", "nodes": 4, "delay_ms": 20.0, "bandwidth_gbps": 10.0}"#;
        let config = ScenarioConfig::from_json(json).unwrap();

        assert_eq!(
            config,
            ScenarioConfig::Homogeneous {
                nodes: 4,
                delay_ms: 20.0,
                bandwidth_gbps: 10.0
            }
        );

        let topo = config.generate().unwrap();
        assert_eq!(topo.delay[[0, 3]], 20.0);
        assert_eq!(topo.bandwidth[[2, 1]], 10.0);
    }

    #[test]
    fn rejects_unknown_scenarios() {
        assert!(ScenarioConfig::from_json(r#"{"scenario": "moon"}"#).is_err());
        assert!(ScenarioConfig::from_json(r#"{"nodes": 8}"#).is_err());
    }

    #[test]
    fn config_names_match_scenario_names() {
        for scenario in Scenario::ALL {
            let json = format!(r#"{{"scenario": "{}"}}"#, scenario.name());
            let config = ScenarioConfig::from_json(&json).unwrap();
            assert_eq!(config.scenario(), scenario);
        }
    }

    #[test]
    fn with_nodes_replaces_only_the_node_count() {
        let config = ScenarioConfig::from(Scenario::SpotDatacenter).with_nodes(12);
        assert_eq!(
            config,
            ScenarioConfig::SpotDatacenter {
                nodes: 12,
                instance_count: 8,
                gpu_per_instance: 4
            }
        );
    }

    #[test]
    fn default_config_generates_like_the_scenario() {
        for scenario in Scenario::ALL {
            let config = ScenarioConfig::from(scenario);
            assert_eq!(
                config.generate().unwrap(),
                scenario.generate(scenario.default_nodes()).unwrap()
            );
        }
    }
}
