use placement_resolver::anchor::{Anchor, AnchorTracker};
use placement_resolver::config::placement::{load_config, load_detections};
use placement_resolver::io::write_json_file;
use placement_resolver::{PlacementQuery, PlacementReport, PlacementResolver};
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
    let config_path = Path::new(&config_path);
    let config = load_config(config_path)?;
    let detections = load_detections(config_path, &config.input)?;

    let resolver = PlacementResolver::new(config.resolver.clone());
    let query = PlacementQuery::new(&detections)
        .with_filter(config.query.filter)
        .with_reference_height(config.query.reference_height)
        .with_infinite_plane(config.query.infinite_plane);
    let report = resolver.resolve_with_diagnostics(&query);

    print_text_summary(&report);

    if let Some(det) = &report.chosen {
        let mut tracker = AnchorTracker::new();
        let update = tracker.add_or_update(Anchor::placed_on(det, 0.0, -det.distance));
        println!(
            "  anchor: id={} height={:.3}",
            update.added.id.0,
            update.added.height()
        );
    }

    if let Some(path) = config.output.json_out_path(config_path) {
        write_json_file(&path, &report)?;
        println!("\nJSON report written to {}", path.display());
    }

    Ok(())
}

fn print_text_summary(report: &PlacementReport) {
    println!("Placement summary");
    println!("  candidates: {}", report.trace.candidates_total);
    println!("  filter: {:?}", Vec::from(report.filter));
    println!("  reference_height: {}", format_opt(report.reference_height));
    println!("  infinite_plane: {}", report.infinite_plane);
    match (&report.chosen, report.chosen_index, report.stage) {
        (Some(det), Some(idx), Some(stage)) => {
            println!("  chosen: #{idx} via {stage:?}");
            println!(
                "    kind={:?} alignment={:?} distance={:.3} height={:.3}",
                det.kind, det.alignment, det.distance, det.world_height
            );
        }
        _ => println!("  chosen: none (no acceptable surface)"),
    }
    let trace = &report.trace;
    println!(
        "\nTrace: confirmed_seen={} infinite_scanned={} height_rejections={} fallback_v={} fallback_h={} elapsed_ms={:.3}",
        trace.confirmed_seen,
        trace.infinite_scanned,
        trace.height_rejections,
        format_idx(trace.fallback_vertical),
        format_idx(trace.fallback_horizontal),
        report.timings.total_ms,
    );
}

fn format_opt(val: Option<f32>) -> String {
    val.map(|v| format!("{:.3}", v))
        .unwrap_or_else(|| "-".to_string())
}

fn format_idx(val: Option<usize>) -> String {
    val.map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn usage() -> String {
    "Usage: placement_demo <config.json>".to_string()
}
