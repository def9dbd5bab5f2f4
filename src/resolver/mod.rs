//! Placement resolver: picks the surface a virtual object should be anchored to.
//!
//! Overview
//! - The host ray-casts a screen point against its tracked geometry and
//!   reports every intersection as a [`Detection`](crate::types::Detection)
//!   tagged with a kind and an alignment.
//! - The resolver ranks those intersections with a strict priority order,
//!   first match wins:
//!   1. confirmed planes whose alignment passes the filter;
//!   2. (opt-in) planes treated as unbounded: the first allowed vertical hit,
//!      or an allowed horizontal hit whose height lies within a tolerance band
//!      of the reference height;
//!   3. a fallback over the first inferred vertical and first inferred
//!      horizontal candidate, decided by the filter content.
//! - No usable surface is reported as `None`; the resolver never fails and
//!   keeps no state between queries.
//!
//! Modules
//! - [`params`] – tunables (height tolerance band).
//! - `stages` – the three ranking stages as free functions over a slice.
//! - `pipeline` – the [`PlacementResolver`] front-end and [`resolve`].

pub mod params;
mod pipeline;
mod stages;

pub use params::{ResolverParams, DEFAULT_HEIGHT_TOLERANCE};
pub use pipeline::{resolve, PlacementQuery, PlacementResolver};

#[cfg(test)]
mod tests;
