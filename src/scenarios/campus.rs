use super::{check_nodes, Scenario};
use crate::{
    error::Result,
    region::{Region, RegionLabel},
    topology::{filled, set_symmetric, Topology, TransferSizes},
};

const SAME_CAMPUS_DELAY_MS: f64 = 1.0;
const SAME_CAMPUS_BANDWIDTH_GBPS: f64 = 5.0;
const CROSS_CAMPUS_DELAY_MS: f64 = 11.0;
const CROSS_CAMPUS_BANDWIDTH_GBPS: f64 = 1.12;

/// Simulates two university clusters: the first half of the nodes in Ohio,
/// the rest in Virginia.
pub fn simulate_multi_universities(nodes: usize) -> Result<Topology> {
    check_nodes(Scenario::MultiUniversities, nodes)?;

    let split = nodes / 2;
    let regions = (0..nodes)
        .map(|i| {
            if i < split {
                RegionLabel::Geo(Region::Ohio)
            } else {
                RegionLabel::Geo(Region::Virginia)
            }
        })
        .collect();

    let mut delay = filled(nodes, SAME_CAMPUS_DELAY_MS);
    let mut bandwidth = filled(nodes, SAME_CAMPUS_BANDWIDTH_GBPS);
    for i in 0..split {
        for j in split..nodes {
            set_symmetric(&mut delay, i, j, CROSS_CAMPUS_DELAY_MS);
            set_symmetric(&mut bandwidth, i, j, CROSS_CAMPUS_BANDWIDTH_GBPS);
        }
    }

    let topo = Topology::new(
        delay,
        bandwidth,
        Some(regions),
        Some(TransferSizes::DATACENTER),
    );
    topo.log_summary(Scenario::MultiUniversities.description());
    Ok(topo)
}
