use std::fmt;

use serde::{Serialize, Serializer};

/// A named cloud region a group of nodes can be placed in.
///
/// The declaration order is the canonical order used to normalize
/// region pairs in the link tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    Oregon,
    Virginia,
    Ohio,
    Tokyo,
    Seoul,
    Singapore,
    Sydney,
    London,
    Frankfurt,
    Ireland,
    California,
}

impl Region {
    /// Every region, in declaration order.
    pub const ALL: [Region; 11] = [
        Region::Oregon,
        Region::Virginia,
        Region::Ohio,
        Region::Tokyo,
        Region::Seoul,
        Region::Singapore,
        Region::Sydney,
        Region::London,
        Region::Frankfurt,
        Region::Ireland,
        Region::California,
    ];

    /// Returns the city name of this region.
    pub fn name(self) -> &'static str {
        match self {
            Region::Oregon => "Oregon",
            Region::Virginia => "Virginia",
            Region::Ohio => "Ohio",
            Region::Tokyo => "Tokyo",
            Region::Seoul => "Seoul",
            Region::Singapore => "Singapore",
            Region::Sydney => "Sydney",
            Region::London => "London",
            Region::Frankfurt => "Frankfurt",
            Region::Ireland => "Ireland",
            Region::California => "California",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// The placement group a single node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionLabel {
    /// An on-demand datacenter instance.
    Instance(usize),
    /// A spot instance pool.
    SpotInstance(usize),
    /// A node outside every spot pool.
    Standalone,
    /// A geographic region.
    Geo(Region),
}

impl RegionLabel {
    /// Returns the region of a geographic label.
    pub fn region(&self) -> Option<Region> {
        match self {
            RegionLabel::Geo(region) => Some(*region),
            _ => None,
        }
    }
}

impl fmt::Display for RegionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionLabel::Instance(k) => write!(f, "instance_{k}"),
            RegionLabel::SpotInstance(k) => write!(f, "spot_instance_{k}"),
            RegionLabel::Standalone => f.write_str("standalone"),
            RegionLabel::Geo(region) => f.write_str(region.name()),
        }
    }
}

impl Serialize for RegionLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
