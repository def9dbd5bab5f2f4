//! Structured diagnostics returned by
//! [`PlacementResolver::resolve_with_diagnostics`](crate::PlacementResolver::resolve_with_diagnostics).

mod timing;
mod trace;

pub use timing::{StageTiming, TimingBreakdown};
pub use trace::{PlacementReport, ResolutionStage, ResolutionTrace};
