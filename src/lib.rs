#![doc = include_str!("../README.md")]

// Core surface
pub mod diagnostics;
pub mod resolver;
pub mod types;

// Host-side state driven around the resolver.
pub mod anchor;
pub mod paper;
pub mod reveal;

// Demo plumbing.
pub mod config;
pub mod io;

// --- High-level re-exports -------------------------------------------------

pub use crate::diagnostics::{PlacementReport, ResolutionStage};
pub use crate::resolver::{resolve, PlacementQuery, PlacementResolver, ResolverParams};
pub use crate::types::{Alignment, AlignmentFilter, Detection, DetectionKind};

// --- Prelude ---------------------------------------------------------------

/// Everything needed to run a query.
pub mod prelude {
    pub use crate::anchor::AnchorTracker;
    pub use crate::{
        resolve, Alignment, AlignmentFilter, Detection, DetectionKind, PlacementQuery,
        PlacementResolver, ResolverParams,
    };
}
