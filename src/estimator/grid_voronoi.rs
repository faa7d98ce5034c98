//! Discretized Voronoi estimator.
//!
//! Samples a uniform lattice inside the outer box, assigns every sample
//! to its nearest annotated keypoint, and bounds each keypoint's claimed
//! samples (the keypoint itself included). The result approximates the
//! Voronoi cell of each part; the lattice resolution trades fidelity for
//! cost, which stays small at the default 30 intervals per axis.

use crate::geometry;
use crate::types::{Keypoint, Rect};
use nalgebra::Point2;

/// Voronoi-cell bounding boxes for all keypoints, clipped to `outer`.
///
/// Absent keypoints map to [`Rect::ZERO`]. With a single annotated
/// keypoint the whole lattice lands in its cell and the box collapses to
/// the outer box after clipping. Input shape validation lives in
/// [`PartBoxEstimator`](super::PartBoxEstimator); called directly, this
/// accepts any keypoint count.
pub fn estimate(outer: Rect, keypoints: &[Keypoint], resolution: usize) -> Vec<Rect> {
    let resolution = resolution.max(1);
    // Every annotated part seeds its own cell; lattice samples then grow
    // the cell that claims them.
    let mut cells: Vec<Option<Rect>> = keypoints
        .iter()
        .map(|kp| kp.position().map(|p| geometry::point_box(&p)))
        .collect();

    if cells.iter().any(Option::is_some) {
        for sample in lattice(outer, resolution) {
            if let Some(index) = nearest_present(&sample, keypoints) {
                let claimed = geometry::point_box(&sample);
                cells[index] = Some(match cells[index] {
                    Some(cell) => geometry::join(cell, claimed),
                    None => claimed,
                });
            }
        }
    }

    cells
        .into_iter()
        .map(|cell| match cell {
            Some(cell) => geometry::intersect(outer, cell),
            None => Rect::ZERO,
        })
        .collect()
}

/// Uniform `(resolution + 1)²` lattice spanning `outer`, both edges
/// included. Samples are `(y, x)` points.
fn lattice(outer: Rect, resolution: usize) -> Vec<Point2<f64>> {
    let n = resolution as f64;
    let mut samples = Vec::with_capacity((resolution + 1) * (resolution + 1));
    for iy in 0..=resolution {
        let y = outer.min_y + (iy as f64 / n) * outer.height();
        for ix in 0..=resolution {
            let x = outer.min_x + (ix as f64 / n) * outer.width();
            samples.push(Point2::new(y, x));
        }
    }
    samples
}

/// Index of the annotated keypoint nearest to `sample`, or `None` when
/// every keypoint is absent. Exact ties go to the lowest part index, so
/// the partition is deterministic for a fixed keypoint order.
fn nearest_present(sample: &Point2<f64>, keypoints: &[Keypoint]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, keypoint) in keypoints.iter().enumerate() {
        if let Some(p) = keypoint.position() {
            let d = geometry::distance(sample, &p);
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((index, d));
            }
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outer() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn lattice_spans_box_inclusive() {
        let samples = lattice(outer(), 2);
        assert_eq!(samples.len(), 9);
        assert_eq!(samples[0], Point2::new(0.0, 0.0));
        assert_eq!(samples[4], Point2::new(50.0, 50.0));
        assert_eq!(samples[8], Point2::new(100.0, 100.0));
    }

    #[test]
    fn ties_go_to_the_lowest_part_index() {
        let mut keypoints = vec![Keypoint::ABSENT; 15];
        keypoints[2] = Keypoint::new(10.0, 20.0);
        keypoints[7] = Keypoint::new(10.0, 40.0);
        let sample = Point2::new(10.0, 30.0);
        assert_eq!(nearest_present(&sample, &keypoints), Some(2));
    }

    #[test]
    fn single_keypoint_absorbs_the_whole_grid() {
        let mut keypoints = vec![Keypoint::ABSENT; 15];
        keypoints[8] = Keypoint::new(37.0, 62.0);
        let boxes = estimate(outer(), &keypoints, 30);
        assert_eq!(boxes[8], outer());
        for (index, b) in boxes.iter().enumerate() {
            if index != 8 {
                assert_eq!(*b, Rect::ZERO);
            }
        }
    }

    #[test]
    fn all_absent_yields_zero_boxes() {
        let keypoints = vec![Keypoint::ABSENT; 15];
        let boxes = estimate(outer(), &keypoints, 30);
        assert!(boxes.iter().all(|b| *b == Rect::ZERO));
    }
}
