use partbox::config::batch;
use partbox::io::annotations::{load_all_keypoints, load_outer_boxes, write_boxes};
use partbox::PartBoxEstimator;
use rayon::prelude::*;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = batch::load_config(Path::new(&config_path))?;

    let outers = load_outer_boxes(&config.dataset.bounding_boxes)?;
    let keypoint_sets = load_all_keypoints(&config.dataset.part_locs)?;
    if outers.len() != keypoint_sets.len() {
        return Err(format!(
            "{} outer boxes but {} keypoint sets; the dataset files disagree",
            outers.len(),
            keypoint_sets.len()
        ));
    }

    let estimator = PartBoxEstimator::new(config.params.clone());
    let out_dir = &config.output.out_dir;

    // Each image is independent; estimation itself stays single-threaded.
    let failures: Vec<String> = (0..outers.len())
        .into_par_iter()
        .filter_map(|image_id| {
            let out_path = out_dir.join(format!("{image_id}.bb"));
            let run = estimator
                .estimate(outers[image_id], &keypoint_sets[image_id])
                .map_err(|e| e.to_string())
                .and_then(|result| write_boxes(&out_path, &result.boxes));
            run.err().map(|e| format!("image {image_id}: {e}"))
        })
        .collect();

    if !failures.is_empty() {
        return Err(format!(
            "{} of {} image(s) failed:\n{}",
            failures.len(),
            outers.len(),
            failures.join("\n")
        ));
    }

    println!(
        "Wrote part boxes for {} images to {}",
        outers.len(),
        out_dir.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: estimate_batch <config.json>".to_string()
}
