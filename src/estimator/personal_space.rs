//! Personal-space estimator.
//!
//! For each annotated keypoint, take the largest disk around it that
//! contains no other annotated keypoint, circumscribe a square, and clip
//! the square to the outer box. The disk never crosses the midline to the
//! nearest sibling, so the estimate is conservative; it shrinks when
//! keypoints crowd together.

use crate::geometry;
use crate::types::{Keypoint, Rect};

/// Personal-space boxes for all keypoints, clipped to `outer`.
///
/// Absent keypoints map to [`Rect::ZERO`]. Input shape validation lives in
/// [`PartBoxEstimator`](super::PartBoxEstimator); called directly, this
/// accepts any keypoint count.
pub fn estimate(outer: Rect, keypoints: &[Keypoint]) -> Vec<Rect> {
    estimate_with_radii(outer, keypoints).0
}

/// Estimate plus the disk radius actually used per part, for diagnostics.
/// Radii are 0 for absent parts and the outer-box diagonal when a part
/// has no annotated sibling.
pub(crate) fn estimate_with_radii(outer: Rect, keypoints: &[Keypoint]) -> (Vec<Rect>, Vec<f64>) {
    let mut boxes = Vec::with_capacity(keypoints.len());
    let mut radii = Vec::with_capacity(keypoints.len());
    for (index, keypoint) in keypoints.iter().enumerate() {
        match keypoint.position() {
            Some(p) => {
                let radius = personal_radius(outer, keypoints, index);
                boxes.push(geometry::intersect(outer, geometry::square_around(&p, radius)));
                radii.push(radius);
            }
            None => {
                boxes.push(Rect::ZERO);
                radii.push(0.0);
            }
        }
    }
    (boxes, radii)
}

/// Largest sibling-free disk radius for the annotated keypoint at `index`.
///
/// With no other annotated keypoint the minimum is over an empty set;
/// the defined fallback is the outer-box diagonal, which clips to the
/// full outer box downstream.
fn personal_radius(outer: Rect, keypoints: &[Keypoint], index: usize) -> f64 {
    let p = match keypoints[index].position() {
        Some(p) => p,
        None => return 0.0,
    };
    let mut radius = f64::INFINITY;
    for (j, other) in keypoints.iter().enumerate() {
        if j == index {
            continue;
        }
        if let Some(q) = other.position() {
            radius = radius.min(geometry::distance(&p, &q));
        }
    }
    if radius.is_finite() {
        radius
    } else {
        geometry::diagonal(outer)
    }
}
