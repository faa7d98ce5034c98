use serde::Deserialize;
use std::path::PathBuf;

/// Locations of the upstream annotation files.
///
/// Defaults match the dataset layout the tools are expected to sit next
/// to.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Whole-object boxes, one `id x y w h` record per image.
    pub bounding_boxes: PathBuf,
    /// Part keypoints, 15 records per image.
    pub part_locs: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            bounding_boxes: PathBuf::from("bounding_boxes.txt"),
            part_locs: PathBuf::from("parts/part_locs.txt"),
        }
    }
}
