use super::{check_nodes, Scenario};
use crate::{
    error::{Result, TopologyError},
    topology::{filled, set_symmetric, Topology},
};

const DEBUG_DELAY_MS: f64 = 1.0;
const DEBUG_BANDWIDTH_GBPS: f64 = 5.0;
// Past ten nodes the chain bandwidth `(10 - i) / 2` drops to zero.
const DEBUG_MAX_NODES: usize = 10;

/// Simulates a traffic-controlled cluster where every pair of nodes sees the
/// same latency and bandwidth.
///
/// # Arguments
/// * `nodes` - The amount of nodes in the cluster.
/// * `delay_ms` - The latency of every link.
/// * `bandwidth_gbps` - The bandwidth of every link.
///
/// # Returns
/// The generated topology, without region labels or transfer sizes.
pub fn simulate_homogeneous(nodes: usize, delay_ms: f64, bandwidth_gbps: f64) -> Result<Topology> {
    check_nodes(Scenario::Homogeneous, nodes)?;

    let topo = Topology::new(
        filled(nodes, delay_ms),
        filled(nodes, bandwidth_gbps),
        None,
        None,
    );
    topo.log_summary(Scenario::Homogeneous.description());
    Ok(topo)
}

/// Simulates a small pipeline where each hop of the chain `0 - 1 - ... - n`
/// gets slower and narrower: hop `(i, i + 1)` has `5 * (i + 1)` ms of delay
/// and `floor((10 - i) / 2)` Gbps.
pub fn simulate_debug(nodes: usize) -> Result<Topology> {
    check_nodes(Scenario::Debug, nodes)?;
    if nodes > DEBUG_MAX_NODES {
        return Err(TopologyError::InvalidNodeCount {
            scenario: Scenario::Debug.description(),
            nodes,
            reason: "chain bandwidth must stay positive",
        });
    }

    let mut delay = filled(nodes, DEBUG_DELAY_MS);
    let mut bandwidth = filled(nodes, DEBUG_BANDWIDTH_GBPS);
    for i in 0..nodes - 1 {
        set_symmetric(&mut delay, i, i + 1, (5 * (i + 1)) as f64);
        set_symmetric(&mut bandwidth, i, i + 1, ((10 - i) / 2) as f64);
    }

    let topo = Topology::new(delay, bandwidth, None, None);
    topo.log_summary(Scenario::Debug.description());
    Ok(topo)
}
