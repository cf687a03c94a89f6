use std::collections::{BTreeMap, BTreeSet};

use crate::{
    error::{Result, TopologyError},
    region::Region,
};

/// Latency and throughput of the link between two regions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub latency_ms: f64,
    pub bandwidth_gbps: f64,
}

impl Link {
    pub const fn new(latency_ms: f64, bandwidth_gbps: f64) -> Self {
        Self {
            latency_ms,
            bandwidth_gbps,
        }
    }
}

/// An unordered pair of regions.
///
/// Both members are kept in declaration order so `(a, b)` and `(b, a)`
/// build the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionPair {
    low: Region,
    high: Region,
}

impl RegionPair {
    /// Creates a new `RegionPair` from two regions in any order.
    ///
    /// # Arguments
    /// * `a` - One end of the link.
    /// * `b` - The other end of the link.
    ///
    /// # Returns
    /// The normalized pair.
    pub fn new(a: Region, b: Region) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Returns both members, lowest first.
    pub fn regions(&self) -> (Region, Region) {
        (self.low, self.high)
    }
}

/// Inter-region link characteristics keyed by unordered region pair.
#[derive(Debug, Clone, Default)]
pub struct LinkTable {
    links: BTreeMap<RegionPair, Link>,
}

impl LinkTable {
    /// Creates a new `LinkTable` from `(a, b, latency_ms, bandwidth_gbps)` entries.
    ///
    /// # Arguments
    /// * `entries` - One entry per region pair, in either orientation.
    ///
    /// # Returns
    /// A new `LinkTable` instance.
    pub fn from_entries(entries: &[(Region, Region, f64, f64)]) -> Self {
        let links = entries
            .iter()
            .map(|&(a, b, latency_ms, bandwidth_gbps)| {
                (RegionPair::new(a, b), Link::new(latency_ms, bandwidth_gbps))
            })
            .collect();

        Self { links }
    }

    /// The measured links between the ten worldwide cloud regions.
    pub fn worldwide() -> Self {
        Self::from_entries(WORLDWIDE_LINKS)
    }

    /// The links between the four US regions of the regional scenario.
    pub fn regional() -> Self {
        Self::from_entries(REGIONAL_LINKS)
    }

    /// Looks up the link between two distinct regions, in either orientation.
    ///
    /// # Arguments
    /// * `a` - One end of the link.
    /// * `b` - The other end of the link.
    ///
    /// # Returns
    /// The stored link, or `UnmodeledRegionPair` if the table has no entry
    /// for the pair.
    pub fn get(&self, a: Region, b: Region) -> Result<Link> {
        self.links
            .get(&RegionPair::new(a, b))
            .copied()
            .ok_or(TopologyError::UnmodeledRegionPair { a, b })
    }

    /// Returns every region that appears in at least one link.
    pub fn regions(&self) -> BTreeSet<Region> {
        self.links
            .keys()
            .flat_map(|pair| {
                let (a, b) = pair.regions();
                [a, b]
            })
            .collect()
    }

    /// Checks that every pair of distinct regions in `regions` has a link.
    pub fn is_complete_for(&self, regions: &[Region]) -> bool {
        regions.iter().enumerate().all(|(i, &a)| {
            regions[i + 1..]
                .iter()
                .all(|&b| a == b || self.links.contains_key(&RegionPair::new(a, b)))
        })
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

use Region::*;

#[rustfmt::skip]
const WORLDWIDE_LINKS: &[(Region, Region, f64, f64)] = &[
    (Oregon, Virginia, 67.0, 0.79),
    (Oregon, Ohio, 49.0, 1.10),
    (Oregon, Tokyo, 96.0, 0.523),
    (Oregon, Seoul, 124.0, 0.46),
    (Oregon, Singapore, 163.0, 0.341),
    (Oregon, Sydney, 139.0, 0.36),
    (Oregon, London, 136.0, 0.42),
    (Oregon, Frankfurt, 143.0, 0.404),
    (Oregon, Ireland, 124.0, 0.482),
    (Virginia, Ohio, 11.0, 1.12),
    (Virginia, Tokyo, 143.0, 0.524),
    (Virginia, Seoul, 172.0, 0.500),
    (Virginia, Singapore, 230.0, 0.364),
    (Virginia, Sydney, 197.0, 0.383),
    (Virginia, London, 76.0, 1.16),
    (Virginia, Frankfurt, 90.0, 1.02),
    (Virginia, Ireland, 67.0, 1.05),
    (Ohio, Tokyo, 130.0, 0.694),
    (Ohio, Seoul, 159.0, 0.529),
    (Ohio, Singapore, 197.0, 0.452),
    (Ohio, Sydney, 185.0, 0.484),
    (Ohio, London, 86.0, 1.05),
    (Ohio, Frankfurt, 99.0, 0.799),
    (Ohio, Ireland, 77.0, 1.14),
    (Tokyo, Seoul, 34.0, 1.10),
    (Tokyo, Singapore, 73.0, 1.01),
    (Tokyo, Sydney, 100.0, 0.761),
    (Tokyo, London, 210.0, 0.366),
    (Tokyo, Frankfurt, 223.0, 0.36),
    (Tokyo, Ireland, 199.0, 0.465),
    (Seoul, Singapore, 74.0, 1.14),
    (Seoul, Sydney, 148.0, 0.58),
    (Seoul, London, 238.0, 0.342),
    (Seoul, Frankfurt, 235.0, 0.358),
    (Seoul, Ireland, 228.0, 0.335),
    (Singapore, Sydney, 92.0, 0.816),
    (Singapore, London, 169.0, 0.500),
    (Singapore, Frankfurt, 155.0, 0.535),
    (Singapore, Ireland, 179.0, 0.492),
    (Sydney, London, 262.0, 0.326),
    (Sydney, Frankfurt, 265.0, 0.328),
    (Sydney, Ireland, 254.0, 0.344),
    (London, Frankfurt, 14.0, 1.14),
    (London, Ireland, 12.0, 1.09),
    (Frankfurt, Ireland, 24.0, 1.08),
];

#[rustfmt::skip]
const REGIONAL_LINKS: &[(Region, Region, f64, f64)] = &[
    (Virginia, Oregon, 67.0, 1.15),
    (Virginia, California, 59.0, 1.05),
    (Virginia, Ohio, 11.0, 1.12),
    (Oregon, California, 12.0, 1.25),
    (Oregon, Ohio, 49.0, 1.10),
    (California, Ohio, 52.0, 1.02),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_is_unordered() {
        assert_eq!(
            RegionPair::new(Tokyo, Oregon),
            RegionPair::new(Oregon, Tokyo)
        );
        assert_eq!(RegionPair::new(Tokyo, Oregon).regions(), (Oregon, Tokyo));
    }

    #[test]
    fn worldwide_covers_every_city_pair() {
        let table = LinkTable::worldwide();
        let cities: Vec<Region> = Region::ALL
            .into_iter()
            .filter(|r| *r != California)
            .collect();

        assert_eq!(table.len(), 45);
        assert!(table.is_complete_for(&cities));
        assert_eq!(table.regions().len(), 10);
        assert!(!table.is_complete_for(&[Oregon, California]));
    }

    #[test]
    fn lookup_is_symmetric() {
        let table = LinkTable::worldwide();
        for a in table.regions() {
            for b in table.regions() {
                if a != b {
                    assert_eq!(table.get(a, b).unwrap(), table.get(b, a).unwrap());
                }
            }
        }
    }

    #[test]
    fn lookup_returns_stored_values() {
        let table = LinkTable::worldwide();
        assert_eq!(table.get(Ireland, London).unwrap(), Link::new(12.0, 1.09));
        assert_eq!(table.get(Virginia, Oregon).unwrap(), Link::new(67.0, 0.79));
    }

    #[test]
    fn regional_differs_from_worldwide() {
        let regional = LinkTable::regional();
        assert_eq!(regional.len(), 6);
        assert_eq!(regional.get(Oregon, Virginia).unwrap(), Link::new(67.0, 1.15));
        assert!(regional.is_complete_for(&[Virginia, Oregon, California, Ohio]));
    }

    #[test]
    fn unmodeled_pair_is_an_error() {
        let table = LinkTable::worldwide();
        let err = table.get(California, Tokyo).unwrap_err();
        assert_eq!(
            err,
            TopologyError::UnmodeledRegionPair {
                a: California,
                b: Tokyo
            }
        );
        assert!(LinkTable::regional().get(Seoul, Sydney).is_err());
    }

    #[test]
    fn empty_table() {
        let table = LinkTable::default();
        assert!(table.is_empty());
        assert!(table.get(Oregon, Ohio).is_err());
    }
}
