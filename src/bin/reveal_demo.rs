use placement_resolver::config::reveal::load_config;
use placement_resolver::io::write_json_file;
use placement_resolver::paper::PaperGrid;
use placement_resolver::reveal::{RevealCycle, RevealFrame};
use serde::Serialize;
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

    let mut cycle =
        RevealCycle::new(config.image_height, config.cover_depth, config.reveal.clone())?;
    let mut paper = PaperGrid::from_params(&config.paper)?;
    let (cols, rows) = paper.dims();

    println!(
        "Reveal cycle: image_height={} cover_depth={:.3} step_px={} max_steps={} interval_ms={}",
        config.image_height,
        config.cover_depth,
        cycle.params().step_px,
        cycle.params().max_steps,
        cycle.params().tick_interval_ms
    );
    println!(
        "Paper: {}x{} patches over {:.3}x{:.3} scratch_radius={:.3}",
        cols, rows, config.paper.width, config.paper.depth, config.paper.scratch_radius
    );

    let mut ticks = Vec::with_capacity(config.ticks);
    for tick in 0..config.ticks {
        let frame = cycle.tick();
        // One touch per tick, sweeping the patch centres row by row.
        let slot = tick % paper.total();
        let touch = paper.patch_center((slot % cols, slot / cols));
        let torn = paper.scratch_radius(touch.x, touch.y, config.paper.scratch_radius);
        println!(
            "  t={:>4} step={:>3} crop={:>8.1} scale_z={:.3} z={:.4} torn={:>2} paper_left={}",
            tick,
            frame.step,
            frame.crop_height,
            frame.scale_z,
            frame.position.z,
            torn,
            paper.remaining()
        );
        ticks.push(RevealTick {
            frame,
            torn,
            paper_remaining: paper.remaining(),
        });
    }
    println!("Paper cleared: {:.1}%", paper.cleared_fraction() * 100.0);

    if let Some(path) = config.output.json_out_path(config_path) {
        write_json_file(&path, &ticks)?;
        println!("Frames written to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: reveal_demo <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RevealTick {
    frame: RevealFrame,
    torn: usize,
    paper_remaining: usize,
}
