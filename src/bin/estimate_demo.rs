use partbox::config::estimate;
use partbox::diagnostics::EstimateReport;
use partbox::io::annotations::{load_keypoints, load_outer_box, write_boxes};
use partbox::io::write_json_file;
use partbox::{Part, PartBoxEstimator, Rect};
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
    let config = estimate::load_config(Path::new(&config_path))?;

    let outer = load_outer_box(&config.dataset.bounding_boxes, config.image_id)?;
    let keypoints = load_keypoints(&config.dataset.part_locs, config.image_id)?;

    let estimator = PartBoxEstimator::new(config.params.clone());
    let report = estimator
        .estimate_with_diagnostics(outer, &keypoints)
        .map_err(|e| e.to_string())?;

    write_boxes(&config.output.boxes_out, &report.result.boxes)?;
    print_text_summary(config.image_id, &report);
    println!("Boxes written to {}", config.output.boxes_out.display());

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &report)?;
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}

fn print_text_summary(image_id: usize, report: &EstimateReport) {
    let res = &report.result;
    println!("Estimation summary for image {image_id}");
    println!(
        "  annotated parts: {}/{}",
        res.present,
        report.diagnostics.keypoints_total
    );
    println!("  latency_ms: {:.3}", res.latency_ms);

    for (part, b) in Part::ALL.iter().zip(&res.boxes) {
        if *b == Rect::ZERO {
            println!("  {part:>10}: (not annotated)");
        } else {
            println!(
                "  {part:>10}: ({:.1}, {:.1}, {:.1}, {:.1})",
                b.min_y, b.min_x, b.max_y, b.max_x
            );
        }
    }

    let diag = &report.diagnostics;
    println!(
        "\nTimings (ms): personal_space={:.3} grid_voronoi={:.3} combine={:.3} total={:.3}",
        diag.personal_space.elapsed_ms,
        diag.grid_voronoi.elapsed_ms,
        diag.combine_ms,
        diag.total_latency_ms
    );
    println!(
        "Grid: resolution={} samples={}",
        diag.grid_voronoi.grid_resolution, diag.grid_voronoi.samples
    );
}

fn usage() -> String {
    "Usage: estimate_demo <config.json>".to_string()
}
