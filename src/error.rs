use std::{error::Error, fmt};

use crate::region::Region;

/// The topology module's result type.
pub type Result<T> = std::result::Result<T, TopologyError>;

/// All errors that can occur while generating a topology.
#[derive(Debug, Clone, PartialEq)]
pub enum TopologyError {
    /// The link table stores neither orientation of this region pair.
    UnmodeledRegionPair { a: Region, b: Region },
    /// The node count is outside what the scenario can lay out.
    InvalidNodeCount {
        scenario: &'static str,
        nodes: usize,
        reason: &'static str,
    },
    /// The requested group shape cannot partition any node.
    InvalidGrouping(String),
    /// No scenario answers to this name or index.
    UnknownScenario(String),
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmodeledRegionPair { a, b } => {
                write!(f, "unmodeled region pair: {a}-{b} (in either order)")
            }
            Self::InvalidNodeCount {
                scenario,
                nodes,
                reason,
            } => write!(f, "invalid node count {nodes} for {scenario}: {reason}"),
            Self::InvalidGrouping(msg) => write!(f, "invalid grouping: {msg}"),
            Self::UnknownScenario(name) => write!(f, "unknown scenario: {name}"),
        }
    }
}

impl Error for TopologyError {}
