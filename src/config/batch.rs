use super::dataset::DatasetConfig;
use crate::estimator::EstimatorParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct BatchToolConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub params: EstimatorParams,
    pub output: BatchOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct BatchOutputConfig {
    /// Directory receiving one `<image_id>.bb` file per image.
    pub out_dir: PathBuf,
}

pub fn load_config(path: &Path) -> Result<BatchToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
