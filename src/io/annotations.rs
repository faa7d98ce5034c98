//! Readers and writers for the upstream annotation text formats.
//!
//! Formats are fixed by convention with the annotation data and preserved
//! as-is:
//! - `bounding_boxes.txt`: one `id x y w h` record per image; the line
//!   index (not the id field) is the image id. Converted to the
//!   row-major box `(y, x, y + h, x + w)`.
//! - `parts/part_locs.txt`: one `image_id part_id x y visible` record
//!   per part, 15 consecutive records per image. The `(x, y)` pair sits
//!   at fields 2..4 and is reordered to `(y, x)`; `(0, 0)` means the
//!   part was not annotated.
//! - Output boxes: four space-separated numbers per line,
//!   `min_y min_x max_y max_x`, lines joined by newlines.

use crate::parts::PART_COUNT;
use crate::types::{Keypoint, Rect};
use std::fs;
use std::path::Path;

/// Parse one `id x y w h` record into a box.
pub fn parse_outer_box_record(line: &str) -> Result<Rect, String> {
    let mut fields = line.split_whitespace();
    let _id = fields.next().ok_or("empty outer-box record")?;
    let coords: Vec<f64> = fields
        .map(|w| {
            w.parse::<f64>()
                .map_err(|e| format!("bad outer-box field {w:?}: {e}"))
        })
        .collect::<Result<_, _>>()?;
    if coords.len() != 4 {
        return Err(format!(
            "expected 4 coordinates after the id, got {}",
            coords.len()
        ));
    }
    let (x, y, w, h) = (coords[0], coords[1], coords[2], coords[3]);
    Ok(Rect::new(y, x, y + h, x + w))
}

/// Parse one `image_id part_id x y visible` record into a keypoint,
/// reordering `(x, y)` to the `(y, x)` convention.
pub fn parse_keypoint_record(line: &str) -> Result<Keypoint, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(format!(
            "expected at least 4 fields in keypoint record, got {}",
            fields.len()
        ));
    }
    let x: f64 = fields[2]
        .parse()
        .map_err(|e| format!("bad keypoint x {:?}: {e}", fields[2]))?;
    let y: f64 = fields[3]
        .parse()
        .map_err(|e| format!("bad keypoint y {:?}: {e}", fields[3]))?;
    Ok(Keypoint::new(y, x))
}

/// Outer box for `image_id`, taken from line `image_id` of `path`.
pub fn load_outer_box(path: &Path, image_id: usize) -> Result<Rect, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let line = contents
        .split('\n')
        .nth(image_id)
        .ok_or_else(|| format!("{}: no record for image {image_id}", path.display()))?;
    parse_outer_box_record(line)
        .map_err(|e| format!("{}:{}: {e}", path.display(), image_id + 1))
}

/// All outer boxes in `path`, indexed by image id.
pub fn load_outer_boxes(path: &Path) -> Result<Vec<Rect>, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let mut lines: Vec<&str> = contents.split('\n').collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            parse_outer_box_record(line)
                .map_err(|e| format!("{}:{}: {e}", path.display(), index + 1))
        })
        .collect()
}

/// The 15 keypoints for `image_id`: records `15 * image_id` through
/// `15 * (image_id + 1)` of `path`, in catalogue order.
pub fn load_keypoints(path: &Path, image_id: usize) -> Result<Vec<Keypoint>, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let lines: Vec<&str> = contents.split('\n').collect();
    let start = image_id * PART_COUNT;
    let end = start + PART_COUNT;
    if lines.len() < end {
        return Err(format!(
            "{}: no keypoint records for image {image_id}",
            path.display()
        ));
    }
    lines[start..end]
        .iter()
        .enumerate()
        .map(|(offset, line)| {
            parse_keypoint_record(line)
                .map_err(|e| format!("{}:{}: {e}", path.display(), start + offset + 1))
        })
        .collect()
}

/// Keypoint lists for every image in `path`, indexed by image id.
pub fn load_all_keypoints(path: &Path) -> Result<Vec<Vec<Keypoint>>, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let mut lines: Vec<&str> = contents.split('\n').collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    if lines.len() % PART_COUNT != 0 {
        return Err(format!(
            "{}: {} keypoint records is not a multiple of {PART_COUNT}",
            path.display(),
            lines.len()
        ));
    }
    lines
        .chunks(PART_COUNT)
        .enumerate()
        .map(|(image_id, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(offset, line)| {
                    parse_keypoint_record(line).map_err(|e| {
                        format!(
                            "{}:{}: {e}",
                            path.display(),
                            image_id * PART_COUNT + offset + 1
                        )
                    })
                })
                .collect()
        })
        .collect()
}

/// Serialize boxes one per line as `min_y min_x max_y max_x`.
pub fn format_boxes(boxes: &[Rect]) -> String {
    boxes
        .iter()
        .map(|b| format!("{} {} {} {}", b.min_y, b.min_x, b.max_y, b.max_x))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write estimated boxes to `path`, one box per line, creating parent
/// directories.
pub fn write_boxes(path: &Path, boxes: &[Rect]) -> Result<(), String> {
    super::ensure_parent_dir(path)?;
    fs::write(path, format_boxes(boxes))
        .map_err(|e| format!("Failed to write boxes {}: {e}", path.display()))
}
