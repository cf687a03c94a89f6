mod campus;
mod datacenter;
mod geo;
mod synthetic;

use std::{fmt, str::FromStr};

pub use campus::simulate_multi_universities;
pub use datacenter::{simulate_datacenter, simulate_spot_datacenter, SpotGroup};
pub use geo::{
    region_link, simulate_regional_geo_distributed, simulate_worldwide_geo_distributed,
    INTRA_REGION_LINK, WORLDWIDE_CITIES,
};
pub use synthetic::{simulate_debug, simulate_homogeneous};

use crate::{
    error::{Result, TopologyError},
    topology::Topology,
};

/// Node count used when a scenario is requested without one.
pub const DEFAULT_NODES: usize = 64;
/// Node count of the debug pipeline.
pub const DEBUG_NODES: usize = 8;
pub const DEFAULT_HOMOGENEOUS_DELAY_MS: f64 = 50.0;
pub const DEFAULT_HOMOGENEOUS_BANDWIDTH_GBPS: f64 = 1.0;

/// The deployment topologies a cluster can be simulated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    Datacenter,
    SpotDatacenter,
    MultiUniversities,
    RegionalGeoDistributed,
    WorldwideGeoDistributed,
    Homogeneous,
    Debug,
}

impl Scenario {
    /// Every scenario, ordered by index.
    pub const ALL: [Scenario; 7] = [
        Scenario::Datacenter,
        Scenario::SpotDatacenter,
        Scenario::MultiUniversities,
        Scenario::RegionalGeoDistributed,
        Scenario::WorldwideGeoDistributed,
        Scenario::Homogeneous,
        Scenario::Debug,
    ];

    /// Returns the short name used on the command line and in configs.
    pub fn name(self) -> &'static str {
        match self {
            Scenario::Datacenter => "datacenter",
            Scenario::SpotDatacenter => "spot_datacenter",
            Scenario::MultiUniversities => "multi_universities",
            Scenario::RegionalGeoDistributed => "regional",
            Scenario::WorldwideGeoDistributed => "worldwide",
            Scenario::Homogeneous => "homogeneous",
            Scenario::Debug => "debug",
        }
    }

    /// Returns a human readable description.
    pub fn description(self) -> &'static str {
        match self {
            Scenario::Datacenter => "on-demand datacenter",
            Scenario::SpotDatacenter => "spot datacenter",
            Scenario::MultiUniversities => "multi universities",
            Scenario::RegionalGeoDistributed => "regional geo distributed",
            Scenario::WorldwideGeoDistributed => "worldwide geo distributed",
            Scenario::Homogeneous => "homogeneous traffic control",
            Scenario::Debug => "debug pipeline",
        }
    }

    /// Returns the case number of this scenario.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the scenario with case number `index`, if any.
    pub fn from_index(index: usize) -> Option<Scenario> {
        Self::ALL.get(index).copied()
    }

    /// Returns the node count this scenario is generated with by default.
    pub fn default_nodes(self) -> usize {
        match self {
            Scenario::Debug => DEBUG_NODES,
            _ => DEFAULT_NODES,
        }
    }

    /// Generates this scenario for `nodes` nodes with its default parameters.
    ///
    /// # Arguments
    /// * `nodes` - The amount of nodes in the cluster.
    ///
    /// # Returns
    /// The generated topology, or the scenario's error.
    pub fn generate(self, nodes: usize) -> Result<Topology> {
        match self {
            Scenario::Datacenter => simulate_datacenter(nodes),
            Scenario::SpotDatacenter => simulate_spot_datacenter(nodes, SpotGroup::default()),
            Scenario::MultiUniversities => simulate_multi_universities(nodes),
            Scenario::RegionalGeoDistributed => simulate_regional_geo_distributed(nodes),
            Scenario::WorldwideGeoDistributed => simulate_worldwide_geo_distributed(nodes),
            Scenario::Homogeneous => simulate_homogeneous(
                nodes,
                DEFAULT_HOMOGENEOUS_DELAY_MS,
                DEFAULT_HOMOGENEOUS_BANDWIDTH_GBPS,
            ),
            Scenario::Debug => simulate_debug(nodes),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = TopologyError;

    /// Parses either a scenario name or its case number.
    fn from_str(s: &str) -> Result<Self> {
        let unknown = || TopologyError::UnknownScenario(s.to_string());

        if let Ok(index) = s.parse::<usize>() {
            return Scenario::from_index(index).ok_or_else(unknown);
        }

        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name().eq_ignore_ascii_case(s))
            .ok_or_else(unknown)
    }
}

/// Rejects empty clusters.
fn check_nodes(scenario: Scenario, nodes: usize) -> Result<()> {
    if nodes == 0 {
        return Err(TopologyError::InvalidNodeCount {
            scenario: scenario.description(),
            nodes,
            reason: "a topology needs at least one node",
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        for (i, scenario) in Scenario::ALL.into_iter().enumerate() {
            assert_eq!(scenario.index(), i);
            assert_eq!(Scenario::from_index(i), Some(scenario));
        }
        assert_eq!(Scenario::from_index(7), None);
    }

    #[test]
    fn parses_names_and_indices() {
        assert_eq!("worldwide".parse::<Scenario>(), Ok(Scenario::WorldwideGeoDistributed));
        assert_eq!("Spot_Datacenter".parse::<Scenario>(), Ok(Scenario::SpotDatacenter));
        assert_eq!("6".parse::<Scenario>(), Ok(Scenario::Debug));
        assert_eq!(
            "7".parse::<Scenario>(),
            Err(TopologyError::UnknownScenario("7".to_string()))
        );
        assert!("mars".parse::<Scenario>().is_err());
    }

    #[test]
    fn every_scenario_rejects_zero_nodes() {
        for scenario in Scenario::ALL {
            let err = scenario.generate(0).unwrap_err();
            assert!(
                matches!(err, TopologyError::InvalidNodeCount { nodes: 0, .. }),
                "{scenario}: {err}"
            );
        }
    }

    #[test]
    fn every_scenario_generates_its_default_size() {
        for scenario in Scenario::ALL {
            let topo = scenario.generate(scenario.default_nodes()).unwrap();
            assert_eq!(topo.nodes(), scenario.default_nodes());
            assert!(topo.is_symmetric(), "{scenario} is not symmetric");
        }
    }
}
