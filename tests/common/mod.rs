pub mod keypoints;
