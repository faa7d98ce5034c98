use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Hand-annotated part location in row-major `(y, x)` image coordinates.
///
/// The upstream annotation convention encodes a part with no annotation as
/// the literal point `(0, 0)`; [`Keypoint::is_absent`] mirrors that. A
/// genuine annotation at the image origin is therefore indistinguishable
/// from a missing one. Inherited from the source data and deliberately
/// preserved.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub y: f64,
    pub x: f64,
}

impl Keypoint {
    /// Sentinel marking a part that was not annotated.
    pub const ABSENT: Keypoint = Keypoint { y: 0.0, x: 0.0 };

    pub fn new(y: f64, x: f64) -> Self {
        Self { y, x }
    }

    /// True when this entry is the absence sentinel.
    #[inline]
    pub fn is_absent(&self) -> bool {
        self.y == 0.0 && self.x == 0.0
    }

    /// The annotated position with components ordered `(y, x)`, or `None`
    /// for the absence sentinel.
    #[inline]
    pub fn position(&self) -> Option<Point2<f64>> {
        if self.is_absent() {
            None
        } else {
            Some(Point2::new(self.y, self.x))
        }
    }
}

/// Axis-aligned box in row-major `(min_y, min_x, max_y, max_x)` order.
///
/// Boxes produced by the estimators satisfy `min <= max` on both axes,
/// with one documented exception: clipping a box that does not overlap
/// the clip region yields an inverted box (`min > max`), which is passed
/// through unchanged as "no feasible overlap".
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min_y: f64,
    pub min_x: f64,
    pub max_y: f64,
    pub max_x: f64,
}

impl Rect {
    /// Degenerate all-zero box; the "no box" sentinel for absent parts.
    pub const ZERO: Rect = Rect {
        min_y: 0.0,
        min_x: 0.0,
        max_y: 0.0,
        max_x: 0.0,
    };

    pub fn new(min_y: f64, min_x: f64, max_y: f64, max_x: f64) -> Self {
        Self {
            min_y,
            min_x,
            max_y,
            max_x,
        }
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// True when every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.min_y.is_finite()
            && self.min_x.is_finite()
            && self.max_y.is_finite()
            && self.max_x.is_finite()
    }

    /// True when `other` lies within this box on both axes.
    pub fn contains(&self, other: &Rect) -> bool {
        self.min_y <= other.min_y
            && self.min_x <= other.min_x
            && other.max_y <= self.max_y
            && other.max_x <= self.max_x
    }
}

impl Default for Rect {
    fn default() -> Self {
        Rect::ZERO
    }
}

/// Output of a single estimation call.
#[derive(Clone, Debug, Default, Serialize)]
pub struct EstimateResult {
    /// One box per catalogue part, index-aligned with the input keypoints.
    pub boxes: Vec<Rect>,
    /// Number of input keypoints that carried an annotation.
    pub present: usize,
    pub latency_ms: f64,
}
