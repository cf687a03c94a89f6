use ndarray::{Array2, ArrayView2};
use serde::{ser::SerializeStruct, Serialize, Serializer};

use crate::region::RegionLabel;

/// Payload sizes, in gigabytes, that the scheduler should assume when
/// sending between nodes of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransferSizes {
    pub activation_gb: f64,
    pub gradient_gb: f64,
}

impl TransferSizes {
    /// Activations of a 288 MB pipeline stage with 1 GB gradients.
    pub const DATACENTER: TransferSizes = TransferSizes::new(288.0 / 1024.0, 1.0);
    pub const REGIONAL: TransferSizes = TransferSizes::new(0.4, 0.7);
    pub const WORLDWIDE: TransferSizes = TransferSizes::new(0.5, 0.9);

    pub const fn new(activation_gb: f64, gradient_gb: f64) -> Self {
        Self {
            activation_gb,
            gradient_gb,
        }
    }
}

/// The network cost model of a cluster.
///
/// `delay[[i, j]]` is the one-way latency in milliseconds from node `i` to
/// node `j` and `bandwidth[[i, j]]` the throughput between them in Gbps.
/// Both matrices are square and symmetric.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    pub delay: Array2<f64>,
    pub bandwidth: Array2<f64>,
    pub regions: Option<Vec<RegionLabel>>,
    pub transfer: Option<TransferSizes>,
}

impl Topology {
    /// Creates a new `Topology`.
    ///
    /// # Arguments
    /// * `delay` - The latency matrix in milliseconds.
    /// * `bandwidth` - The bandwidth matrix in Gbps.
    /// * `regions` - The placement group of every node, if the scenario has any.
    /// * `transfer` - The payload sizes the scenario assumes, if any.
    ///
    /// # Returns
    /// A new `Topology` instance.
    pub fn new(
        delay: Array2<f64>,
        bandwidth: Array2<f64>,
        regions: Option<Vec<RegionLabel>>,
        transfer: Option<TransferSizes>,
    ) -> Self {
        debug_assert_eq!(delay.dim(), bandwidth.dim());
        debug_assert!(regions.as_ref().map_or(true, |r| r.len() == delay.nrows()));

        Self {
            delay,
            bandwidth,
            regions,
            transfer,
        }
    }

    /// Returns the amount of nodes in this topology.
    pub fn nodes(&self) -> usize {
        self.delay.nrows()
    }

    /// Checks that both matrices are square and symmetric.
    pub fn is_symmetric(&self) -> bool {
        is_symmetric(self.delay.view()) && is_symmetric(self.bandwidth.view())
    }

    /// Writes a one-line summary of this topology to the debug log.
    pub fn log_summary(&self, scenario: &str) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }

        let (dmin, dmax) = min_max(self.delay.view());
        let (bmin, bmax) = min_max(self.bandwidth.view());
        let groups = self.regions.as_ref().map_or(0, |regions| {
            let mut seen: Vec<&RegionLabel> = Vec::new();
            for label in regions {
                if !seen.contains(&label) {
                    seen.push(label);
                }
            }
            seen.len()
        });

        log::debug!(
            "{scenario}: {} nodes, {groups} group(s), delay {dmin}..={dmax} ms, bandwidth {bmin}..={bmax} Gbps",
            self.nodes()
        );
    }
}

impl Serialize for Topology {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Topology", 5)?;
        state.serialize_field("nodes", &self.nodes())?;
        state.serialize_field("delay", &rows(self.delay.view()))?;
        state.serialize_field("bandwidth", &rows(self.bandwidth.view()))?;
        state.serialize_field("regions", &self.regions)?;
        state.serialize_field("transfer", &self.transfer)?;
        state.end()
    }
}

/// Builds a `nodes × nodes` matrix with every entry set to `value`.
pub(crate) fn filled(nodes: usize, value: f64) -> Array2<f64> {
    Array2::from_elem((nodes, nodes), value)
}

/// Sets both `[i, j]` and `[j, i]`.
pub(crate) fn set_symmetric(matrix: &mut Array2<f64>, i: usize, j: usize, value: f64) {
    matrix[[i, j]] = value;
    matrix[[j, i]] = value;
}

fn is_symmetric(matrix: ArrayView2<f64>) -> bool {
    matrix.is_square() && matrix == matrix.t()
}

fn min_max(matrix: ArrayView2<f64>) -> (f64, f64) {
    matrix
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

fn rows(matrix: ArrayView2<f64>) -> Vec<Vec<f64>> {
    matrix.rows().into_iter().map(|row| row.to_vec()).collect()
}
