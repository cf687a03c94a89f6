//! Synthetic network topologies for scheduling work on distributed GPU
//! clusters.
//!
//! Every scenario builds a [`Topology`]: a symmetric latency matrix (ms), a
//! symmetric bandwidth matrix (Gbps), the placement group of each node and
//! the payload sizes the scheduler should assume for that deployment.

pub mod configs;
pub mod error;
pub mod links;
pub mod region;
pub mod scenarios;
pub mod topology;

pub use configs::ScenarioConfig;
pub use error::{Result, TopologyError};
pub use links::{Link, LinkTable, RegionPair};
pub use region::{Region, RegionLabel};
pub use scenarios::{
    simulate_datacenter, simulate_debug, simulate_homogeneous, simulate_multi_universities,
    simulate_regional_geo_distributed, simulate_spot_datacenter,
    simulate_worldwide_geo_distributed, Scenario, SpotGroup,
};
pub use topology::{Topology, TransferSizes};
