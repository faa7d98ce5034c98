//! Error types raised by the estimation core.

use crate::types::Rect;
use thiserror::Error;

/// Input that violates the estimator's shape contract.
///
/// Raised before any estimation work starts; the core never produces a
/// partial result. Degenerate but well-shaped inputs (all keypoints
/// absent, a single annotated keypoint, coincident keypoints) are not
/// errors and resolve to defined fallbacks instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    /// The keypoint list must contain exactly one entry per catalogue part.
    #[error("expected {expected} keypoints, got {actual}")]
    KeypointCount { expected: usize, actual: usize },

    /// The outer box must consist of four finite coordinates.
    #[error("outer box has a non-finite coordinate: {outer:?}")]
    NonFiniteOuterBox { outer: Rect },
}
