#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod estimator;
pub mod geometry;
pub mod io;
pub mod parts;
pub mod types;

// Collaborator modules for the tools.
pub mod color;
pub mod config;

// --- High-level re-exports -------------------------------------------------

// Main entry points: estimator + results.
pub use crate::error::InvalidInput;
pub use crate::estimator::{estimate_boxes, EstimatorParams, PartBoxEstimator};
pub use crate::parts::{Part, PART_COUNT};
pub use crate::types::{EstimateResult, Keypoint, Rect};

// High-level diagnostics returned by the estimator.
pub use crate::diagnostics::{EstimateDiagnostics, EstimateReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use partbox::prelude::*;
///
/// let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
/// let mut keypoints = vec![Keypoint::ABSENT; PART_COUNT];
/// keypoints[2] = Keypoint::new(55.0, 45.0);
///
/// let boxes = estimate_boxes(outer, &keypoints).unwrap();
/// assert_eq!(boxes.len(), PART_COUNT);
/// ```
pub mod prelude {
    pub use crate::estimator::{estimate_boxes, EstimatorParams, PartBoxEstimator};
    pub use crate::parts::{Part, PART_COUNT};
    pub use crate::types::{EstimateResult, Keypoint, Rect};
}
