use super::timing::TimingBreakdown;
use crate::types::{AlignmentFilter, Detection};
use serde::Serialize;

/// Ranking stage that produced the chosen detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStage {
    ConfirmedPlane,
    InfinitePlane,
    Fallback,
}

/// Counters collected while walking the stages.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionTrace {
    pub candidates_total: usize,
    /// Confirmed-plane detections inspected before stage 1 returned.
    pub confirmed_seen: usize,
    pub infinite_plane_searched: bool,
    /// Unbounded detections passing the filter that stage 2 looked at.
    pub infinite_scanned: usize,
    /// Horizontal hits dropped for lying outside the height band.
    pub height_rejections: usize,
    pub fallback_vertical: Option<usize>,
    pub fallback_horizontal: Option<usize>,
}

impl ResolutionTrace {
    pub fn new(candidates_total: usize) -> Self {
        Self {
            candidates_total,
            ..Default::default()
        }
    }
}

/// Result of a single resolution together with the query echo and trace.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementReport {
    pub chosen: Option<Detection>,
    /// Position of `chosen` in the input sequence.
    pub chosen_index: Option<usize>,
    pub stage: Option<ResolutionStage>,
    pub filter: AlignmentFilter,
    pub reference_height: Option<f32>,
    pub infinite_plane: bool,
    pub trace: ResolutionTrace,
    pub timings: TimingBreakdown,
}

impl PlacementReport {
    pub fn found(&self) -> bool {
        self.chosen.is_some()
    }
}
