//! Structured reports describing a single estimation run.
//!
//! Everything here is `Serialize` so the binaries can dump a JSON report
//! next to the estimated boxes.

use crate::types::{EstimateResult, Rect};
use serde::Serialize;

/// Compact result plus the stage-level breakdown the estimator saw.
#[derive(Clone, Debug, Serialize)]
pub struct EstimateReport {
    pub result: EstimateResult,
    pub diagnostics: EstimateDiagnostics,
}

/// Stage-level breakdown of a single estimation call.
#[derive(Clone, Debug, Serialize)]
pub struct EstimateDiagnostics {
    pub keypoints_total: usize,
    pub keypoints_present: usize,
    pub personal_space: PersonalSpaceStage,
    pub grid_voronoi: GridVoronoiStage,
    pub combine_ms: f64,
    pub total_latency_ms: f64,
}

/// Raw personal-space output before averaging.
#[derive(Clone, Debug, Serialize)]
pub struct PersonalSpaceStage {
    pub boxes: Vec<Rect>,
    /// Disk radius used per part: the nearest-sibling distance, the
    /// outer-box diagonal when no sibling is annotated, 0 for absent
    /// parts.
    pub radii: Vec<f64>,
    pub elapsed_ms: f64,
}

/// Raw grid-Voronoi output before averaging.
#[derive(Clone, Debug, Serialize)]
pub struct GridVoronoiStage {
    pub boxes: Vec<Rect>,
    pub grid_resolution: usize,
    /// Lattice samples assigned during the partition pass.
    pub samples: usize,
    pub elapsed_ms: f64,
}
