//! Parameter types configuring the estimation stages.

use serde::{Deserialize, Serialize};

/// Estimator-wide parameters.
///
/// The grid resolution is the main fidelity/cost knob for the Voronoi
/// pass; the default keeps a single call well under a millisecond.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorParams {
    /// Number of lattice intervals per axis for the grid-Voronoi
    /// estimator; the lattice carries `(grid_resolution + 1)²` samples.
    /// Values below 1 are treated as 1.
    pub grid_resolution: usize,
}

impl Default for EstimatorParams {
    fn default() -> Self {
        Self {
            grid_resolution: 30,
        }
    }
}
