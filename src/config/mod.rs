//! JSON configuration for the command-line tools.

pub mod batch;
pub mod dataset;
pub mod estimate;
