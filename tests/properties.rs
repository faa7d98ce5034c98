//! Property tests over randomly placed keypoints and outer boxes.

use partbox::estimator::{grid_voronoi, personal_space};
use partbox::{estimate_boxes, EstimatorParams, Keypoint, PartBoxEstimator, Rect, PART_COUNT};
use proptest::prelude::*;

const GRID_RESOLUTION: usize = 30;

/// Outer boxes anywhere around the origin, keypoints absent or placed
/// strictly inside the outer box.
fn arb_input() -> impl Strategy<Value = (Rect, Vec<Keypoint>)> {
    (
        -200.0f64..200.0,
        -200.0f64..200.0,
        1.0f64..300.0,
        1.0f64..300.0,
    )
        .prop_flat_map(|(y, x, h, w)| {
            let outer = Rect::new(y, x, y + h, x + w);
            let keypoint = prop_oneof![
                2 => Just(Keypoint::ABSENT),
                3 => (y..y + h, x..x + w).prop_map(|(ky, kx)| Keypoint::new(ky, kx)),
            ];
            (
                Just(outer),
                proptest::collection::vec(keypoint, PART_COUNT),
            )
        })
}

proptest! {
    #[test]
    fn absent_parts_always_get_zero_boxes((outer, keypoints) in arb_input()) {
        let personal = personal_space::estimate(outer, &keypoints);
        let voronoi = grid_voronoi::estimate(outer, &keypoints, GRID_RESOLUTION);
        let combined = estimate_boxes(outer, &keypoints).unwrap();
        for (index, keypoint) in keypoints.iter().enumerate() {
            if keypoint.is_absent() {
                prop_assert_eq!(personal[index], Rect::ZERO);
                prop_assert_eq!(voronoi[index], Rect::ZERO);
                prop_assert_eq!(combined[index], Rect::ZERO);
            }
        }
    }

    #[test]
    fn present_parts_stay_inside_the_outer_box((outer, keypoints) in arb_input()) {
        let personal = personal_space::estimate(outer, &keypoints);
        let voronoi = grid_voronoi::estimate(outer, &keypoints, GRID_RESOLUTION);
        let combined = estimate_boxes(outer, &keypoints).unwrap();
        for (index, keypoint) in keypoints.iter().enumerate() {
            if keypoint.is_absent() {
                continue;
            }
            prop_assert!(outer.contains(&personal[index]));
            prop_assert!(outer.contains(&voronoi[index]));
            prop_assert!(outer.contains(&combined[index]));
        }
    }

    #[test]
    fn combiner_averages_the_two_estimators((outer, keypoints) in arb_input()) {
        let estimator = PartBoxEstimator::new(EstimatorParams {
            grid_resolution: GRID_RESOLUTION,
        });
        let combined = estimator.estimate(outer, &keypoints).unwrap().boxes;
        let personal = personal_space::estimate(outer, &keypoints);
        let voronoi = grid_voronoi::estimate(outer, &keypoints, GRID_RESOLUTION);
        for index in 0..PART_COUNT {
            let pairs = [
                (combined[index].min_y, personal[index].min_y, voronoi[index].min_y),
                (combined[index].min_x, personal[index].min_x, voronoi[index].min_x),
                (combined[index].max_y, personal[index].max_y, voronoi[index].max_y),
                (combined[index].max_x, personal[index].max_x, voronoi[index].max_x),
            ];
            for (got, a, b) in pairs {
                prop_assert!((got - 0.5 * (a + b)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn estimation_is_deterministic((outer, keypoints) in arb_input()) {
        let first = estimate_boxes(outer, &keypoints).unwrap();
        let second = estimate_boxes(outer, &keypoints).unwrap();
        prop_assert_eq!(first, second);
    }
}
