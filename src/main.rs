use placement_resolver::prelude::*;

fn main() {
    // Demo stub: a table slightly closer than the wall behind it.
    let hits = [
        Detection::new(
            DetectionKind::InferredHorizontalPlane,
            Alignment::Horizontal,
            0.9,
            -0.7,
        ),
        Detection::new(
            DetectionKind::InferredVerticalPlane,
            Alignment::Vertical,
            1.6,
            0.1,
        ),
    ];
    for (label, filter) in [
        ("any", AlignmentFilter::ANY),
        ("horizontal", AlignmentFilter::HORIZONTAL),
        ("vertical", AlignmentFilter::VERTICAL),
    ] {
        match resolve(&hits, filter, None, false) {
            Some(det) => println!(
                "{label}: {:?} distance={:.2} height={:.2}",
                det.kind, det.distance, det.world_height
            ),
            None => println!("{label}: no surface"),
        }
    }
}
