//! Front-end tying the ranking stages together.
//!
//! Typical usage:
//! ```no_run
//! use placement_resolver::{AlignmentFilter, PlacementQuery, PlacementResolver, ResolverParams};
//! use placement_resolver::types::Detection;
//!
//! # fn example(hits: &[Detection]) {
//! let resolver = PlacementResolver::new(ResolverParams::default());
//! let query = PlacementQuery::new(hits).with_filter(AlignmentFilter::VERTICAL);
//! let report = resolver.resolve_with_diagnostics(&query);
//! if let Some(det) = report.chosen {
//!     println!("anchor at distance {:.3} ({:?})", det.distance, report.stage);
//! }
//! # }
//! ```
use super::params::ResolverParams;
use super::stages;
use crate::diagnostics::{PlacementReport, ResolutionStage, ResolutionTrace, TimingBreakdown};
use crate::types::{AlignmentFilter, Detection};
use log::debug;
use std::time::Instant;

/// One placement request: the host's hits for a screen point plus the
/// caller's constraints.
#[derive(Clone, Copy, Debug)]
pub struct PlacementQuery<'a> {
    pub detections: &'a [Detection],
    pub filter: AlignmentFilter,
    /// Height of the object being moved, if any. Constrains unbounded
    /// horizontal hits in the infinite-plane stage.
    pub reference_height: Option<f32>,
    /// Opt into the infinite-plane stage.
    pub infinite_plane: bool,
}

impl<'a> PlacementQuery<'a> {
    /// Query with the default filter (both alignments), no reference height
    /// and the infinite-plane stage disabled.
    pub fn new(detections: &'a [Detection]) -> Self {
        Self {
            detections,
            filter: AlignmentFilter::default(),
            reference_height: None,
            infinite_plane: false,
        }
    }

    pub fn with_filter(mut self, filter: AlignmentFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_reference_height(mut self, height: Option<f32>) -> Self {
        self.reference_height = height;
        self
    }

    pub fn with_infinite_plane(mut self, enabled: bool) -> Self {
        self.infinite_plane = enabled;
        self
    }
}

/// Stateless placement resolver.
#[derive(Clone, Debug, Default)]
pub struct PlacementResolver {
    params: ResolverParams,
}

impl PlacementResolver {
    pub fn new(params: ResolverParams) -> Self {
        Self {
            params: params.sanitized(),
        }
    }

    pub fn params(&self) -> &ResolverParams {
        &self.params
    }

    /// Pick the detection to anchor to, or `None` when nothing qualifies.
    pub fn resolve(&self, query: &PlacementQuery<'_>) -> Option<Detection> {
        let mut trace = ResolutionTrace::new(query.detections.len());
        let mut timings = TimingBreakdown::default();
        self.rank(query, &mut trace, &mut timings).map(|(idx, _)| query.detections[idx])
    }

    /// Resolve and report which stage decided, with per-stage counters and
    /// timings.
    pub fn resolve_with_diagnostics(&self, query: &PlacementQuery<'_>) -> PlacementReport {
        let total_start = Instant::now();
        let mut trace = ResolutionTrace::new(query.detections.len());
        let mut timings = TimingBreakdown::default();
        let ranked = self.rank(query, &mut trace, &mut timings);
        timings.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;

        PlacementReport {
            chosen: ranked.map(|(idx, _)| query.detections[idx]),
            chosen_index: ranked.map(|(idx, _)| idx),
            stage: ranked.map(|(_, stage)| stage),
            filter: query.filter,
            reference_height: query.reference_height,
            infinite_plane: query.infinite_plane,
            trace,
            timings,
        }
    }

    fn rank(
        &self,
        query: &PlacementQuery<'_>,
        trace: &mut ResolutionTrace,
        timings: &mut TimingBreakdown,
    ) -> Option<(usize, ResolutionStage)> {
        let detections = query.detections;
        debug!(
            "PlacementResolver::resolve start n={} filter={:?} ref={:?} infinite={}",
            detections.len(),
            query.filter,
            query.reference_height,
            query.infinite_plane
        );
        if detections.is_empty() {
            return None;
        }

        let confirmed = timings.time("confirmed_plane", || {
            stages::confirmed_plane(detections, query.filter, trace)
        });
        if let Some(idx) = confirmed {
            return Some((idx, ResolutionStage::ConfirmedPlane));
        }

        if query.infinite_plane {
            let tolerance = self.params.height_tolerance;
            let infinite = timings.time("infinite_plane", || {
                stages::infinite_plane(
                    detections,
                    query.filter,
                    query.reference_height,
                    tolerance,
                    trace,
                )
            });
            if let Some(idx) = infinite {
                return Some((idx, ResolutionStage::InfinitePlane));
            }
        }

        timings
            .time("fallback", || stages::fallback(detections, query.filter, trace))
            .map(|idx| (idx, ResolutionStage::Fallback))
    }
}

/// Resolve with default parameters.
///
/// `infinite_plane` opts into the unbounded-plane stage; `reference_height`
/// only matters for that stage.
pub fn resolve(
    detections: &[Detection],
    filter: AlignmentFilter,
    reference_height: Option<f32>,
    infinite_plane: bool,
) -> Option<Detection> {
    let query = PlacementQuery {
        detections,
        filter,
        reference_height,
        infinite_plane,
    };
    PlacementResolver::default().resolve(&query)
}
