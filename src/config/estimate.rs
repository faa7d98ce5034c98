use super::dataset::DatasetConfig;
use crate::estimator::EstimatorParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct EstimateToolConfig {
    /// Zero-based image index into the dataset files.
    pub image_id: usize,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub params: EstimatorParams,
    pub output: EstimateOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct EstimateOutputConfig {
    /// Destination for the estimated boxes, one per line.
    pub boxes_out: PathBuf,
    /// Optional JSON diagnostics report.
    #[serde(default)]
    pub json_out: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<EstimateToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
