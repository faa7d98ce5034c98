//! Estimation pipeline driving both part-box estimators end-to-end.
//!
//! The [`PartBoxEstimator`] exposes a simple API: feed the whole-object
//! box and the 15-entry keypoint list, get one box per part. Internally
//! it validates the input shape, runs the personal-space and grid-Voronoi
//! estimators over identical inputs, and averages their boxes per part.
//!
//! Typical usage:
//! ```
//! use partbox::{Keypoint, PartBoxEstimator, Rect, PART_COUNT};
//!
//! let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
//! let mut keypoints = vec![Keypoint::ABSENT; PART_COUNT];
//! keypoints[0] = Keypoint::new(40.0, 60.0);
//!
//! let estimator = PartBoxEstimator::default();
//! let result = estimator.estimate(outer, &keypoints).unwrap();
//! assert_eq!(result.boxes.len(), PART_COUNT);
//! ```

use super::params::EstimatorParams;
use super::{grid_voronoi, personal_space};
use crate::diagnostics::{
    EstimateDiagnostics, EstimateReport, GridVoronoiStage, PersonalSpaceStage,
};
use crate::error::InvalidInput;
use crate::parts::PART_COUNT;
use crate::types::{EstimateResult, Keypoint, Rect};
use log::debug;
use std::time::Instant;

/// Part-box estimator averaging the personal-space and grid-Voronoi
/// estimates per part.
#[derive(Clone, Debug, Default)]
pub struct PartBoxEstimator {
    params: EstimatorParams,
}

impl PartBoxEstimator {
    /// Create an estimator with the supplied parameters.
    pub fn new(params: EstimatorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EstimatorParams {
        &self.params
    }

    /// Estimate one box per catalogue part, index-aligned with
    /// `keypoints`.
    ///
    /// # Errors
    /// [`InvalidInput`] when the keypoint list is not exactly
    /// [`PART_COUNT`] entries long or the outer box carries a non-finite
    /// coordinate. Raised before any estimation work starts.
    pub fn estimate(
        &self,
        outer: Rect,
        keypoints: &[Keypoint],
    ) -> Result<EstimateResult, InvalidInput> {
        Ok(self.estimate_with_diagnostics(outer, keypoints)?.result)
    }

    /// Run the estimator and return both the result and a detailed
    /// report with each stage's raw boxes and timings.
    ///
    /// # Errors
    /// Same conditions as [`PartBoxEstimator::estimate`].
    pub fn estimate_with_diagnostics(
        &self,
        outer: Rect,
        keypoints: &[Keypoint],
    ) -> Result<EstimateReport, InvalidInput> {
        validate(outer, keypoints)?;
        let present = keypoints.iter().filter(|kp| !kp.is_absent()).count();
        let grid_resolution = self.params.grid_resolution.max(1);
        debug!(
            "PartBoxEstimator::estimate start present={}/{} grid_resolution={}",
            present,
            keypoints.len(),
            grid_resolution
        );
        let total_start = Instant::now();

        let stage_start = Instant::now();
        let (personal_boxes, radii) = personal_space::estimate_with_radii(outer, keypoints);
        let personal_ms = stage_start.elapsed().as_secs_f64() * 1000.0;

        let stage_start = Instant::now();
        let voronoi_boxes = grid_voronoi::estimate(outer, keypoints, grid_resolution);
        let voronoi_ms = stage_start.elapsed().as_secs_f64() * 1000.0;

        let stage_start = Instant::now();
        let boxes: Vec<Rect> = personal_boxes
            .iter()
            .zip(&voronoi_boxes)
            .map(|(a, b)| mean_box(*a, *b))
            .collect();
        let combine_ms = stage_start.elapsed().as_secs_f64() * 1000.0;

        let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "PartBoxEstimator::estimate done personal_ms={:.3} voronoi_ms={:.3} total_ms={:.3}",
            personal_ms, voronoi_ms, total_ms
        );

        Ok(EstimateReport {
            result: EstimateResult {
                boxes,
                present,
                latency_ms: total_ms,
            },
            diagnostics: EstimateDiagnostics {
                keypoints_total: keypoints.len(),
                keypoints_present: present,
                personal_space: PersonalSpaceStage {
                    boxes: personal_boxes,
                    radii,
                    elapsed_ms: personal_ms,
                },
                grid_voronoi: GridVoronoiStage {
                    boxes: voronoi_boxes,
                    grid_resolution,
                    samples: (grid_resolution + 1) * (grid_resolution + 1),
                    elapsed_ms: voronoi_ms,
                },
                combine_ms,
                total_latency_ms: total_ms,
            },
        })
    }
}

/// Estimate part boxes with default parameters.
///
/// # Errors
/// Same conditions as [`PartBoxEstimator::estimate`].
pub fn estimate_boxes(outer: Rect, keypoints: &[Keypoint]) -> Result<Vec<Rect>, InvalidInput> {
    Ok(PartBoxEstimator::default().estimate(outer, keypoints)?.boxes)
}

/// Componentwise arithmetic mean of two boxes. Averaging two all-zero
/// boxes keeps the absence sentinel intact.
fn mean_box(a: Rect, b: Rect) -> Rect {
    Rect {
        min_y: 0.5 * (a.min_y + b.min_y),
        min_x: 0.5 * (a.min_x + b.min_x),
        max_y: 0.5 * (a.max_y + b.max_y),
        max_x: 0.5 * (a.max_x + b.max_x),
    }
}

fn validate(outer: Rect, keypoints: &[Keypoint]) -> Result<(), InvalidInput> {
    if keypoints.len() != PART_COUNT {
        return Err(InvalidInput::KeypointCount {
            expected: PART_COUNT,
            actual: keypoints.len(),
        });
    }
    if !outer.is_finite() {
        return Err(InvalidInput::NonFiniteOuterBox { outer });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_box_is_componentwise() {
        let a = Rect::new(0.0, 0.0, 10.0, 20.0);
        let b = Rect::new(2.0, 4.0, 6.0, 8.0);
        assert_eq!(mean_box(a, b), Rect::new(1.0, 2.0, 8.0, 14.0));
    }

    #[test]
    fn validate_rejects_short_and_long_lists() {
        let outer = Rect::new(0.0, 0.0, 10.0, 10.0);
        let short = vec![Keypoint::ABSENT; PART_COUNT - 1];
        let long = vec![Keypoint::ABSENT; PART_COUNT + 1];
        assert_eq!(
            validate(outer, &short),
            Err(InvalidInput::KeypointCount {
                expected: PART_COUNT,
                actual: PART_COUNT - 1,
            })
        );
        assert!(validate(outer, &long).is_err());
    }

    #[test]
    fn validate_rejects_non_finite_outer_box() {
        let keypoints = vec![Keypoint::ABSENT; PART_COUNT];
        let outer = Rect::new(0.0, f64::NAN, 10.0, 10.0);
        assert!(matches!(
            validate(outer, &keypoints),
            Err(InvalidInput::NonFiniteOuterBox { .. })
        ));
    }
}
