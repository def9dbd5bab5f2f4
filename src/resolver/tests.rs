use super::*;
use crate::diagnostics::ResolutionStage;
use crate::types::{Alignment, AlignmentFilter, Detection, DetectionKind};

fn confirmed(alignment: Alignment, distance: f32) -> Detection {
    Detection::new(DetectionKind::ConfirmedPlane, alignment, distance, 0.0)
}

fn inferred_h(distance: f32, height: f32) -> Detection {
    Detection::new(
        DetectionKind::InferredHorizontalPlane,
        Alignment::Horizontal,
        distance,
        height,
    )
}

fn inferred_v(distance: f32) -> Detection {
    Detection::new(
        DetectionKind::InferredVerticalPlane,
        Alignment::Vertical,
        distance,
        0.0,
    )
}

#[test]
fn empty_input_resolves_to_none() {
    for filter in [
        AlignmentFilter::ANY,
        AlignmentFilter::HORIZONTAL,
        AlignmentFilter::VERTICAL,
    ] {
        assert_eq!(resolve(&[], filter, None, false), None);
        assert_eq!(resolve(&[], filter, Some(0.0), true), None);
    }
}

#[test]
fn confirmed_plane_beats_closer_inferred_hits() {
    let hits = [inferred_v(0.2), inferred_h(0.1, 0.0), confirmed(Alignment::Horizontal, 5.0)];
    let chosen = resolve(&hits, AlignmentFilter::ANY, None, true);
    assert_eq!(chosen, Some(hits[2]));
}

#[test]
fn confirmed_plane_outside_filter_is_skipped() {
    let hits = [
        confirmed(Alignment::Horizontal, 1.0),
        confirmed(Alignment::Vertical, 3.0),
        inferred_h(0.5, 0.0),
    ];
    let chosen = resolve(&hits, AlignmentFilter::VERTICAL, None, false);
    assert_eq!(chosen, Some(hits[1]));
}

#[test]
fn both_alignments_pick_nearest_fallback() {
    let hits = [inferred_h(2.0, 0.0), inferred_v(1.0)];
    assert_eq!(resolve(&hits, AlignmentFilter::ANY, None, false), Some(hits[1]));
    assert_eq!(
        resolve(&hits, AlignmentFilter::HORIZONTAL, None, false),
        Some(hits[0])
    );
}

#[test]
fn equal_distances_prefer_horizontal() {
    let hits = [inferred_v(1.0), inferred_h(1.0, 0.0)];
    assert_eq!(resolve(&hits, AlignmentFilter::ANY, None, false), Some(hits[1]));
}

#[test]
fn vertical_filter_degrades_to_horizontal() {
    let hits = [inferred_h(1.5, 0.0)];
    assert_eq!(resolve(&hits, AlignmentFilter::VERTICAL, None, false), Some(hits[0]));
}

#[test]
fn horizontal_filter_never_returns_vertical() {
    let hits = [inferred_v(0.5)];
    assert_eq!(resolve(&hits, AlignmentFilter::HORIZONTAL, None, false), None);
}

#[test]
fn empty_filter_matches_nothing() {
    let hits = [confirmed(Alignment::Horizontal, 1.0), inferred_h(1.0, 0.0), inferred_v(1.0)];
    assert_eq!(resolve(&hits, AlignmentFilter::EMPTY, None, true), None);
}

#[test]
fn fallback_uses_first_occurrence_of_each_kind() {
    let hits = [inferred_h(3.0, 0.0), inferred_h(0.5, 0.0), inferred_v(2.0)];
    // The second horizontal hit is closer but only the first one competes.
    assert_eq!(resolve(&hits, AlignmentFilter::ANY, None, false), Some(hits[2]));
}

#[test]
fn infinite_plane_takes_first_vertical_without_comparing_distance() {
    let hits = [inferred_h(0.3, 0.0), inferred_v(4.0), inferred_v(1.0)];
    let resolver = PlacementResolver::default();
    let query = PlacementQuery::new(&hits)
        .with_filter(AlignmentFilter::VERTICAL)
        .with_infinite_plane(true);
    let report = resolver.resolve_with_diagnostics(&query);
    assert_eq!(report.chosen_index, Some(1));
    assert_eq!(report.stage, Some(ResolutionStage::InfinitePlane));
}

#[test]
fn infinite_plane_accepts_horizontal_without_reference() {
    let hits = [inferred_v(0.5), inferred_h(2.0, 1.0)];
    let query = PlacementQuery::new(&hits)
        .with_filter(AlignmentFilter::HORIZONTAL)
        .with_infinite_plane(true);
    let report = PlacementResolver::default().resolve_with_diagnostics(&query);
    assert_eq!(report.chosen_index, Some(1));
    assert_eq!(report.stage, Some(ResolutionStage::InfinitePlane));
}

#[test]
fn height_band_rejection_falls_through_to_fallback() {
    let hits = [inferred_h(1.0, 0.5)];
    let query = PlacementQuery::new(&hits)
        .with_filter(AlignmentFilter::HORIZONTAL)
        .with_reference_height(Some(0.0))
        .with_infinite_plane(true);
    let report = PlacementResolver::default().resolve_with_diagnostics(&query);
    assert_eq!(report.chosen, Some(hits[0]));
    assert_eq!(report.stage, Some(ResolutionStage::Fallback));
    assert!(report.trace.infinite_plane_searched);
    assert_eq!(report.trace.height_rejections, 1);
}

#[test]
fn height_band_accepts_later_hit_inside_band() {
    let hits = [inferred_h(0.5, 0.3), inferred_h(1.2, 0.02)];
    let query = PlacementQuery::new(&hits)
        .with_filter(AlignmentFilter::HORIZONTAL)
        .with_reference_height(Some(0.0))
        .with_infinite_plane(true);
    let report = PlacementResolver::default().resolve_with_diagnostics(&query);
    assert_eq!(report.chosen_index, Some(1));
    assert_eq!(report.stage, Some(ResolutionStage::InfinitePlane));
}

#[test]
fn height_band_boundary_is_exclusive() {
    let hits = [inferred_h(1.0, 0.25), inferred_v(0.1)];
    let params = ResolverParams {
        height_tolerance: 0.25,
    };
    let query = PlacementQuery::new(&hits)
        .with_filter(AlignmentFilter::HORIZONTAL)
        .with_reference_height(Some(0.0))
        .with_infinite_plane(true);
    let report = PlacementResolver::new(params).resolve_with_diagnostics(&query);
    assert_eq!(report.stage, Some(ResolutionStage::Fallback));
    assert_eq!(report.trace.height_rejections, 1);
}

#[test]
fn mode_flag_off_skips_infinite_stage() {
    let hits = [inferred_v(4.0), inferred_h(1.0, 0.0)];
    let query = PlacementQuery::new(&hits);
    let report = PlacementResolver::default().resolve_with_diagnostics(&query);
    assert!(!report.trace.infinite_plane_searched);
    assert_eq!(report.stage, Some(ResolutionStage::Fallback));
    assert_eq!(report.chosen_index, Some(1));
}

#[test]
fn invalid_tolerance_is_replaced_by_default() {
    let resolver = PlacementResolver::new(ResolverParams {
        height_tolerance: f32::NAN,
    });
    assert_eq!(resolver.params().height_tolerance, DEFAULT_HEIGHT_TOLERANCE);
}

#[test]
fn resolution_is_deterministic() {
    let hits = [inferred_h(2.0, 0.0), inferred_v(1.0), confirmed(Alignment::Vertical, 9.0)];
    let resolver = PlacementResolver::default();
    let query = PlacementQuery::new(&hits).with_infinite_plane(true);
    let first = resolver.resolve(&query);
    for _ in 0..8 {
        assert_eq!(resolver.resolve(&query), first);
    }
}

#[test]
fn default_band_accepts_inside_and_rejects_outside() {
    let resolver = PlacementResolver::new(ResolverParams::default());
    let inside = [inferred_h(1.0, 0.04)];
    let outside = [inferred_h(1.0, 0.06)];
    for (hits, expected_stage, rejections) in [
        (&inside, ResolutionStage::InfinitePlane, 0),
        (&outside, ResolutionStage::Fallback, 1),
    ] {
        let query = PlacementQuery::new(hits)
            .with_filter(AlignmentFilter::HORIZONTAL)
            .with_reference_height(Some(0.0))
            .with_infinite_plane(true);
        let report = resolver.resolve_with_diagnostics(&query);
        assert_eq!(
            report.stage,
            Some(expected_stage),
            "height {} against the default band",
            hits[0].world_height
        );
        assert_eq!(report.trace.height_rejections, rejections);
    }
}

#[test]
fn timings_cover_each_stage_that_ran() {
    let resolver = PlacementResolver::default();
    let hits = [inferred_h(1.0, 0.5), inferred_v(2.0)];

    let confirmed_only = [confirmed(Alignment::Vertical, 1.0)];
    let report = resolver.resolve_with_diagnostics(&PlacementQuery::new(&confirmed_only));
    assert_eq!(report.timings.labels(), vec!["confirmed_plane"]);

    let report = resolver.resolve_with_diagnostics(&PlacementQuery::new(&hits));
    assert_eq!(report.timings.labels(), vec!["confirmed_plane", "fallback"]);

    let query = PlacementQuery::new(&hits)
        .with_filter(AlignmentFilter::HORIZONTAL)
        .with_reference_height(Some(0.0))
        .with_infinite_plane(true);
    let report = resolver.resolve_with_diagnostics(&query);
    assert_eq!(
        report.timings.labels(),
        vec!["confirmed_plane", "infinite_plane", "fallback"]
    );
    let stage_sum: f64 = report.timings.stages.iter().map(|s| s.elapsed_ms).sum();
    assert!(
        stage_sum <= report.timings.total_ms,
        "stage times {stage_sum} exceed total {}",
        report.timings.total_ms
    );
    assert!(report.timings.stage_ms("infinite_plane").is_some());

    let report = resolver.resolve_with_diagnostics(&PlacementQuery::new(&[]));
    assert!(report.timings.stages.is_empty());
}
