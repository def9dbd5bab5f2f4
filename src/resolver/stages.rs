use crate::diagnostics::ResolutionTrace;
use crate::types::{Alignment, AlignmentFilter, Detection, DetectionKind};
use log::debug;

/// Stage 1: first confirmed plane whose alignment passes the filter.
pub(crate) fn confirmed_plane(
    detections: &[Detection],
    filter: AlignmentFilter,
    trace: &mut ResolutionTrace,
) -> Option<usize> {
    let mut found = None;
    for (idx, det) in detections.iter().enumerate() {
        if det.kind != DetectionKind::ConfirmedPlane {
            continue;
        }
        trace.confirmed_seen += 1;
        if filter.contains(det.alignment) {
            found = Some(idx);
            break;
        }
    }
    debug!(
        "stages::confirmed_plane seen={} hit={:?}",
        trace.confirmed_seen, found
    );
    found
}

/// Stage 2: scan the unbounded planes in input order.
///
/// A vertical hit is taken as soon as it is seen. A horizontal hit is taken
/// when there is no reference height, or when its height lies strictly within
/// `tolerance` of the reference.
pub(crate) fn infinite_plane(
    detections: &[Detection],
    filter: AlignmentFilter,
    reference_height: Option<f32>,
    tolerance: f32,
    trace: &mut ResolutionTrace,
) -> Option<usize> {
    trace.infinite_plane_searched = true;
    for (idx, det) in detections.iter().enumerate() {
        if !det.kind.is_inferred() || !filter.contains(det.alignment) {
            continue;
        }
        trace.infinite_scanned += 1;
        match (det.alignment, reference_height) {
            (Alignment::Vertical, _) | (Alignment::Horizontal, None) => {
                debug!("stages::infinite_plane accept idx={idx} alignment={:?}", det.alignment);
                return Some(idx);
            }
            (Alignment::Horizontal, Some(reference)) => {
                if (det.world_height - reference).abs() < tolerance {
                    debug!(
                        "stages::infinite_plane accept idx={idx} height={:.3} ref={:.3}",
                        det.world_height, reference
                    );
                    return Some(idx);
                }
                trace.height_rejections += 1;
            }
        }
    }
    debug!(
        "stages::infinite_plane no hit scanned={} height_rejections={}",
        trace.infinite_scanned, trace.height_rejections
    );
    None
}

/// Stage 3: choose between the first inferred vertical and the first inferred
/// horizontal detection according to the filter content.
pub(crate) fn fallback(
    detections: &[Detection],
    filter: AlignmentFilter,
    trace: &mut ResolutionTrace,
) -> Option<usize> {
    let first_of = |kind: DetectionKind| detections.iter().position(|d| d.kind == kind);
    let vertical = first_of(DetectionKind::InferredVerticalPlane);
    let horizontal = first_of(DetectionKind::InferredHorizontalPlane);
    trace.fallback_vertical = vertical;
    trace.fallback_horizontal = horizontal;

    let choice = match (
        filter.contains(Alignment::Horizontal),
        filter.contains(Alignment::Vertical),
    ) {
        (true, false) => horizontal,
        // Vertical placements degrade to horizontal surfaces.
        (false, true) => vertical.or(horizontal),
        (true, true) => match (horizontal, vertical) {
            (Some(h), Some(v)) => {
                if detections[h].distance <= detections[v].distance {
                    Some(h)
                } else {
                    Some(v)
                }
            }
            (h, v) => h.or(v),
        },
        (false, false) => None,
    };
    debug!(
        "stages::fallback vertical={:?} horizontal={:?} choice={:?}",
        vertical, horizontal, choice
    );
    choice
}
