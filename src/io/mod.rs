//! I/O adapters around the estimation core.
//!
//! - [`annotations`]: readers and writers for the upstream line-oriented
//!   annotation formats.
//! - `write_json_file`: pretty-print a serializable report to disk.
//!
//! The core itself performs no I/O; everything here is a thin wrapper
//! that the binaries compose with [`PartBoxEstimator`](crate::PartBoxEstimator).

pub mod annotations;

use serde::Serialize;
use std::fs;
use std::path::Path;

/// Serialize a value as pretty JSON to `path`, creating parent
/// directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
