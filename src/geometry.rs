//! Axis-aligned box primitives shared by the estimators.

use crate::types::Rect;
use nalgebra::Point2;

/// Coordinate-wise tightest common region of two boxes: the max of the
/// mins and the min of the maxes on each axis.
///
/// Disjoint inputs produce an inverted box (`min > max`). That encodes
/// "no feasible overlap" and is passed through by callers, not repaired.
#[inline]
pub fn intersect(a: Rect, b: Rect) -> Rect {
    Rect {
        min_y: a.min_y.max(b.min_y),
        min_x: a.min_x.max(b.min_x),
        max_y: a.max_y.min(b.max_y),
        max_x: a.max_x.min(b.max_x),
    }
}

/// Coordinate-wise union of two boxes: the min of the mins and the max of
/// the maxes on each axis.
#[inline]
pub fn join(a: Rect, b: Rect) -> Rect {
    Rect {
        min_y: a.min_y.min(b.min_y),
        min_x: a.min_x.min(b.min_x),
        max_y: a.max_y.max(b.max_y),
        max_x: a.max_x.max(b.max_x),
    }
}

/// Smallest box containing every box in `boxes`, or `None` for an empty
/// input.
pub fn join_all(boxes: impl IntoIterator<Item = Rect>) -> Option<Rect> {
    boxes.into_iter().reduce(join)
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(p: &Point2<f64>, q: &Point2<f64>) -> f64 {
    (p - q).norm()
}

/// Zero-area box collapsed onto `p`. Point components are `(y, x)`.
#[inline]
pub fn point_box(p: &Point2<f64>) -> Rect {
    Rect {
        min_y: p[0],
        min_x: p[1],
        max_y: p[0],
        max_x: p[1],
    }
}

/// Square of half-width `radius` centered on `p`. Point components are
/// `(y, x)`.
#[inline]
pub fn square_around(p: &Point2<f64>, radius: f64) -> Rect {
    Rect {
        min_y: p[0] - radius,
        min_x: p[1] - radius,
        max_y: p[0] + radius,
        max_x: p[1] + radius,
    }
}

/// Length of the diagonal of `r`.
#[inline]
pub fn diagonal(r: Rect) -> f64 {
    (r.height() * r.height() + r.width() * r.width()).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersect_takes_tightest_common_region() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 15.0, 15.0);
        assert_eq!(intersect(a, b), Rect::new(5.0, 5.0, 10.0, 10.0));
    }

    #[test]
    fn join_takes_coordinate_wise_union() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 15.0, 15.0);
        assert_eq!(join(a, b), Rect::new(0.0, 0.0, 15.0, 15.0));
    }

    #[test]
    fn disjoint_intersect_is_inverted_and_passed_through() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 30.0, 30.0);
        let clipped = intersect(a, b);
        assert_eq!(clipped, Rect::new(20.0, 20.0, 10.0, 10.0));
        assert!(clipped.min_y > clipped.max_y && clipped.min_x > clipped.max_x);
    }

    #[test]
    fn join_all_folds_and_handles_empty() {
        assert_eq!(join_all(std::iter::empty()), None);
        let boxes = [
            Rect::new(1.0, 2.0, 3.0, 4.0),
            Rect::new(0.0, 5.0, 2.0, 6.0),
            Rect::new(2.0, 1.0, 4.0, 3.0),
        ];
        assert_eq!(join_all(boxes), Some(Rect::new(0.0, 1.0, 4.0, 6.0)));
    }

    #[test]
    fn distance_is_euclidean() {
        let p = Point2::new(0.0, 0.0);
        let q = Point2::new(3.0, 4.0);
        assert!((distance(&p, &q) - 5.0).abs() < 1e-12);
        assert!((distance(&q, &p) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn square_around_is_centered() {
        let sq = square_around(&Point2::new(10.0, 20.0), 5.0);
        assert_eq!(sq, Rect::new(5.0, 15.0, 15.0, 25.0));
    }

    #[test]
    fn point_box_has_zero_area() {
        let b = point_box(&Point2::new(7.0, 3.0));
        assert_eq!(b, Rect::new(7.0, 3.0, 7.0, 3.0));
        assert_eq!(b.height(), 0.0);
        assert_eq!(b.width(), 0.0);
    }

    #[test]
    fn diagonal_of_unit_square() {
        let r = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert!((diagonal(r) - std::f64::consts::SQRT_2).abs() < 1e-12);
    }
}
