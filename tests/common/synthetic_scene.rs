use placement_resolver::{Alignment, Detection, DetectionKind};

pub fn inferred_horizontal(distance: f32, height: f32) -> Detection {
    Detection::new(
        DetectionKind::InferredHorizontalPlane,
        Alignment::Horizontal,
        distance,
        height,
    )
}

pub fn inferred_vertical(distance: f32) -> Detection {
    Detection::new(
        DetectionKind::InferredVerticalPlane,
        Alignment::Vertical,
        distance,
        0.0,
    )
}

pub fn confirmed(alignment: Alignment, distance: f32, height: f32) -> Detection {
    Detection::new(DetectionKind::ConfirmedPlane, alignment, distance, height)
}

/// Hits for a ray that crosses a floor, a table top and the wall behind them,
/// ordered by distance like a host ray cast would report them.
pub fn room_scan() -> Vec<Detection> {
    vec![
        inferred_horizontal(0.8, -0.70),
        inferred_vertical(1.4),
        inferred_horizontal(2.1, -1.45),
        confirmed(Alignment::Horizontal, 2.1, -1.45),
    ]
}
