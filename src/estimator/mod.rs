//! Part-box estimation from sparse keypoints.
//!
//! Overview
//! - Runs two independent estimators over identical inputs: a
//!   personal-space pass that circumscribes a square around the largest
//!   sibling-free disk at each keypoint, and a grid-Voronoi pass that
//!   assigns lattice samples inside the outer box to their nearest
//!   keypoint and bounds each partition.
//! - Averages the two boxes per part componentwise; every box is clipped
//!   to the outer box beforehand.
//! - Parts without an annotation yield the all-zero box at every stage,
//!   so the average preserves the sentinel.
//!
//! Modules
//! - [`params`] – configuration types used by the estimator and CLI.
//! - `pipeline` – the main [`PartBoxEstimator`] implementation.
//! - [`personal_space`] – the nearest-sibling disk estimator.
//! - [`grid_voronoi`] – the discretized Voronoi estimator.
//!
//! Both sub-estimators are callable on their own; the pipeline validates
//! input shape once and reports stage timings.

pub mod grid_voronoi;
pub mod params;
pub mod personal_space;
mod pipeline;

pub use params::EstimatorParams;
pub use pipeline::{estimate_boxes, PartBoxEstimator};
