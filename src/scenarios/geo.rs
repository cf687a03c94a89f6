use super::{check_nodes, Scenario};
use crate::{
    error::{Result, TopologyError},
    links::{Link, LinkTable},
    region::{Region, RegionLabel},
    topology::{filled, set_symmetric, Topology, TransferSizes},
};

/// Latency and bandwidth between two nodes of the same region.
pub const INTRA_REGION_LINK: Link = Link::new(5.0, 2.0);

/// The cities of the worldwide scenario, one block of nodes each.
pub const WORLDWIDE_CITIES: [Region; 8] = [
    Region::Oregon,
    Region::Virginia,
    Region::Ohio,
    Region::Tokyo,
    Region::Seoul,
    Region::London,
    Region::Frankfurt,
    Region::Ireland,
];

const NODES_PER_CITY: usize = 8;

const REGIONAL_QUARTERS: [Region; 4] = [
    Region::Virginia,
    Region::Oregon,
    Region::California,
    Region::Ohio,
];

/// Returns the link between two regions: `intra` if they are the same,
/// otherwise the table's entry.
///
/// # Errors
/// `UnmodeledRegionPair` if the table has no entry for two distinct regions.
pub fn region_link(table: &LinkTable, a: Region, b: Region, intra: Link) -> Result<Link> {
    if a == b {
        return Ok(intra);
    }
    table.get(a, b)
}

/// Simulates a cluster spread over four US regions.
///
/// Nodes are split in contiguous quarters (by `nodes / 4` boundaries):
/// Virginia, Oregon, California and Ohio.
pub fn simulate_regional_geo_distributed(nodes: usize) -> Result<Topology> {
    check_nodes(Scenario::RegionalGeoDistributed, nodes)?;

    let regions: Vec<Region> = (0..nodes)
        .map(|i| {
            let quarter = if i < nodes / 4 {
                0
            } else if i < nodes / 2 {
                1
            } else if i < nodes * 3 / 4 {
                2
            } else {
                3
            };
            REGIONAL_QUARTERS[quarter]
        })
        .collect();

    let topo = geo_topology(&regions, &LinkTable::regional(), TransferSizes::REGIONAL)?;
    topo.log_summary(Scenario::RegionalGeoDistributed.description());
    Ok(topo)
}

/// Simulates a cluster spread over eight cities around the world.
///
/// Node `i` lives in `WORLDWIDE_CITIES[i / 8]`, so at most 64 nodes fit.
/// Inter-city links come from the worldwide link table; a missing entry
/// aborts the generation.
pub fn simulate_worldwide_geo_distributed(nodes: usize) -> Result<Topology> {
    check_nodes(Scenario::WorldwideGeoDistributed, nodes)?;
    if nodes > WORLDWIDE_CITIES.len() * NODES_PER_CITY {
        return Err(TopologyError::InvalidNodeCount {
            scenario: Scenario::WorldwideGeoDistributed.description(),
            nodes,
            reason: "only 8 cities of 8 nodes each are modeled",
        });
    }

    let regions: Vec<Region> = (0..nodes)
        .map(|i| WORLDWIDE_CITIES[i / NODES_PER_CITY])
        .collect();
    assert_eq!(regions.len(), nodes);

    let topo = geo_topology(&regions, &LinkTable::worldwide(), TransferSizes::WORLDWIDE)?;
    topo.log_summary(Scenario::WorldwideGeoDistributed.description());
    Ok(topo)
}

fn geo_topology(regions: &[Region], table: &LinkTable, transfer: TransferSizes) -> Result<Topology> {
    let nodes = regions.len();
    let mut delay = filled(nodes, INTRA_REGION_LINK.latency_ms);
    let mut bandwidth = filled(nodes, INTRA_REGION_LINK.bandwidth_gbps);

    for i in 0..nodes {
        for j in i + 1..nodes {
            let link = region_link(table, regions[i], regions[j], INTRA_REGION_LINK)?;
            set_symmetric(&mut delay, i, j, link.latency_ms);
            set_symmetric(&mut bandwidth, i, j, link.bandwidth_gbps);
        }
    }

    let labels = regions.iter().map(|&r| RegionLabel::Geo(r)).collect();
    Ok(Topology::new(delay, bandwidth, Some(labels), Some(transfer)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regional_quarters() {
        let topo = simulate_regional_geo_distributed(64).unwrap();
        let regions = topo.regions.as_ref().unwrap();

        assert_eq!(regions[15], RegionLabel::Geo(Region::Virginia));
        assert_eq!(regions[16], RegionLabel::Geo(Region::Oregon));
        assert_eq!(regions[47], RegionLabel::Geo(Region::California));
        assert_eq!(regions[48], RegionLabel::Geo(Region::Ohio));
        assert_eq!(topo.transfer, Some(TransferSizes::REGIONAL));
    }

    #[test]
    fn regional_overrides() {
        let topo = simulate_regional_geo_distributed(64).unwrap();
        // (virginia, oregon, california, ohio) = (0, 16, 32, 48)
        let cases = [
            (0, 16, 67.0, 1.15),
            (0, 32, 59.0, 1.05),
            (0, 48, 11.0, 1.12),
            (16, 32, 12.0, 1.25),
            (16, 48, 49.0, 1.10),
            (32, 48, 52.0, 1.02),
            (1, 2, 5.0, 2.0),
            (50, 60, 5.0, 2.0),
        ];

        for (i, j, d, b) in cases {
            assert_eq!(topo.delay[[i, j]], d, "delay {i}-{j}");
            assert_eq!(topo.delay[[j, i]], d, "delay {j}-{i}");
            assert_eq!(topo.bandwidth[[i, j]], b, "bandwidth {i}-{j}");
            assert_eq!(topo.bandwidth[[j, i]], b, "bandwidth {j}-{i}");
        }
    }

    #[test]
    fn regional_tiny_cluster_lands_in_ohio() {
        let topo = simulate_regional_geo_distributed(2).unwrap();
        let regions = topo.regions.unwrap();

        assert_eq!(regions[0], RegionLabel::Geo(Region::Oregon));
        assert_eq!(regions[1], RegionLabel::Geo(Region::Ohio));
        assert_eq!(topo.delay[[0, 1]], 49.0);
    }

    #[test]
    fn worldwide_diagonal_is_intra_city() {
        let topo = simulate_worldwide_geo_distributed(16).unwrap();

        assert_eq!(topo.delay[[3, 3]], 5.0);
        assert_eq!(topo.bandwidth[[9, 9]], 2.0);
        assert_eq!(topo.delay[[0, 8]], 67.0);
        assert_eq!(topo.bandwidth[[0, 8]], 0.79);
    }

    #[test]
    fn worldwide_rejects_more_than_sixty_four_nodes() {
        assert!(matches!(
            simulate_worldwide_geo_distributed(65),
            Err(TopologyError::InvalidNodeCount { nodes: 65, .. })
        ));
    }

    #[test]
    fn region_link_same_region_skips_table() {
        let table = LinkTable::default();
        let link = region_link(&table, Region::California, Region::California, INTRA_REGION_LINK);
        assert_eq!(link, Ok(INTRA_REGION_LINK));
    }

    #[test]
    fn region_link_unmodeled_pair_aborts() {
        let table = LinkTable::worldwide();
        let err = region_link(&table, Region::Tokyo, Region::California, INTRA_REGION_LINK);
        assert_eq!(
            err,
            Err(TopologyError::UnmodeledRegionPair {
                a: Region::Tokyo,
                b: Region::California
            })
        );
    }

    #[test]
    fn missing_link_returns_no_topology() {
        let regions = [Region::Ohio, Region::Sydney];
        let res = geo_topology(&regions, &LinkTable::regional(), TransferSizes::REGIONAL);
        assert!(matches!(res, Err(TopologyError::UnmodeledRegionPair { .. })));
    }
}
