//! Synthetic keypoint layouts shared by the integration tests.

use partbox::{Keypoint, PART_COUNT};

/// All 15 entries absent.
pub fn all_absent() -> Vec<Keypoint> {
    vec![Keypoint::ABSENT; PART_COUNT]
}

/// Absent everywhere except the given `(index, y, x)` entries.
pub fn with_present(entries: &[(usize, f64, f64)]) -> Vec<Keypoint> {
    let mut keypoints = all_absent();
    for &(index, y, x) in entries {
        keypoints[index] = Keypoint::new(y, x);
    }
    keypoints
}

/// A fixed spread of nine annotated parts inside (0, 0, 100, 100).
pub fn scattered() -> Vec<Keypoint> {
    with_present(&[
        (0, 15.0, 25.0),
        (1, 20.0, 80.0),
        (2, 35.0, 55.0),
        (4, 50.0, 10.0),
        (6, 60.0, 90.0),
        (8, 70.0, 40.0),
        (10, 80.0, 65.0),
        (12, 90.0, 20.0),
        (14, 95.0, 85.0),
    ])
}
