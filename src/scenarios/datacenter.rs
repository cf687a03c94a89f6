use super::{check_nodes, Scenario};
use crate::{
    error::{Result, TopologyError},
    region::RegionLabel,
    topology::{filled, set_symmetric, Topology, TransferSizes},
};

const ON_DEMAND_BASE_GBPS: f64 = 3.125;
const ON_DEMAND_BOOST_GBPS: f64 = 96.875;
const MAX_GPUS_PER_INSTANCE: usize = 8;

const SPOT_BASE_GBPS: f64 = 1.25;
const SPOT_BOOST_GBPS: f64 = 98.75;

/// Shape of the spot pools of a spot datacenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpotGroup {
    /// Amount of spot instances.
    pub instance_count: usize,
    /// GPUs, and thus nodes, per spot instance.
    pub gpu_per_instance: usize,
}

impl Default for SpotGroup {
    fn default() -> Self {
        Self {
            instance_count: 8,
            gpu_per_instance: 4,
        }
    }
}

/// Simulates a datacenter of on-demand multi-GPU instances.
///
/// Nodes are packed into instances of `min(nodes / 2, 8)` GPUs (at least
/// one); a trailing partial instance is still an instance. Delay is zero
/// everywhere and nodes of the same instance get the NVLink boost on top of
/// the cross-instance bandwidth.
///
/// # Arguments
/// * `nodes` - The amount of nodes in the cluster.
///
/// # Returns
/// The generated topology, labelled `instance_k`.
pub fn simulate_datacenter(nodes: usize) -> Result<Topology> {
    check_nodes(Scenario::Datacenter, nodes)?;

    let gpus_per_instance = (nodes / 2).clamp(1, MAX_GPUS_PER_INSTANCE);
    let groups: Vec<Option<usize>> = (0..nodes).map(|i| Some(i / gpus_per_instance)).collect();
    let regions = groups
        .iter()
        .flatten()
        .map(|&k| RegionLabel::Instance(k))
        .collect();

    let topo = Topology::new(
        filled(nodes, 0.0),
        grouped_bandwidth(&groups, ON_DEMAND_BASE_GBPS, ON_DEMAND_BOOST_GBPS),
        Some(regions),
        Some(TransferSizes::DATACENTER),
    );
    topo.log_summary(Scenario::Datacenter.description());
    Ok(topo)
}

/// Simulates a datacenter where part of the cluster runs on spot instances.
///
/// The first `instance_count * gpu_per_instance` nodes fill the spot pools in
/// order; every remaining node is standalone and only gets the base
/// bandwidth. A pool the cluster ends in the middle of is not a pool: its
/// nodes are standalone too.
///
/// # Arguments
/// * `nodes` - The amount of nodes in the cluster.
/// * `group` - The shape of the spot pools.
///
/// # Returns
/// The generated topology, labelled `spot_instance_k` or `standalone`.
pub fn simulate_spot_datacenter(nodes: usize, group: SpotGroup) -> Result<Topology> {
    check_nodes(Scenario::SpotDatacenter, nodes)?;
    if group.gpu_per_instance == 0 {
        return Err(TopologyError::InvalidGrouping(
            "a spot instance needs at least one gpu".to_string(),
        ));
    }

    let groups: Vec<Option<usize>> = (0..nodes)
        .map(|i| {
            let k = i / group.gpu_per_instance;
            let full = (k + 1) * group.gpu_per_instance <= nodes;
            (k < group.instance_count && full).then_some(k)
        })
        .collect();
    let regions = groups
        .iter()
        .map(|g| g.map_or(RegionLabel::Standalone, RegionLabel::SpotInstance))
        .collect();

    let topo = Topology::new(
        filled(nodes, 0.0),
        grouped_bandwidth(&groups, SPOT_BASE_GBPS, SPOT_BOOST_GBPS),
        Some(regions),
        Some(TransferSizes::DATACENTER),
    );
    topo.log_summary(Scenario::SpotDatacenter.description());
    Ok(topo)
}

/// Builds a bandwidth matrix of `base` everywhere plus `boost` between nodes
/// of the same group. Nodes without a group are never boosted, not even on
/// the diagonal.
fn grouped_bandwidth(groups: &[Option<usize>], base: f64, boost: f64) -> ndarray::Array2<f64> {
    let nodes = groups.len();
    let mut bandwidth = filled(nodes, base);

    for i in 0..nodes {
        let Some(gi) = groups[i] else {
            continue;
        };
        for j in i..nodes {
            if groups[j] == Some(gi) {
                set_symmetric(&mut bandwidth, i, j, base + boost);
            }
        }
    }

    bandwidth
}
