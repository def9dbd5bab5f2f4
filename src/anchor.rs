//! Single-object anchor bookkeeping.
//!
//! The painting is attached to exactly one anchor in the host's tracking
//! session. Moving it replaces the anchor: the previous one is handed back so
//! the host can remove it from its session before registering the new one.

use crate::types::Detection;
use log::debug;
use nalgebra::{Matrix4, Vector3};
use serde::Serialize;

/// Identifier of an anchor handed to the host session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AnchorId(pub u64);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Anchor {
    pub id: AnchorId,
    pub transform: Matrix4<f32>,
}

impl Anchor {
    /// World-space translation of the anchor.
    pub fn position(&self) -> Vector3<f32> {
        self.transform.fixed_view::<3, 1>(0, 3).into_owned()
    }

    pub fn height(&self) -> f32 {
        self.transform[(1, 3)]
    }

    /// Translation-only transform at the detection's height; the host fills in
    /// the horizontal coordinates from its own intersection point.
    pub fn placed_on(detection: &Detection, x: f32, z: f32) -> Matrix4<f32> {
        Matrix4::new_translation(&Vector3::new(x, detection.world_height, z))
    }
}

/// Outcome of [`AnchorTracker::add_or_update`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnchorUpdate {
    pub added: Anchor,
    /// Anchor the host must drop from its session, if one existed.
    pub removed: Option<Anchor>,
}

/// Owns the (at most one) anchor of the placed object.
#[derive(Debug, Default)]
pub struct AnchorTracker {
    next_id: u64,
    current: Option<Anchor>,
}

impl AnchorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current anchor with a fresh one at `transform`.
    pub fn add_or_update(&mut self, transform: Matrix4<f32>) -> AnchorUpdate {
        let added = Anchor {
            id: AnchorId(self.next_id),
            transform,
        };
        self.next_id += 1;
        let removed = self.current.replace(added.clone());
        debug!(
            "AnchorTracker::add_or_update added={:?} removed={:?} height={:.3}",
            added.id,
            removed.as_ref().map(|a| a.id),
            added.height()
        );
        AnchorUpdate { added, removed }
    }

    pub fn remove(&mut self) -> Option<Anchor> {
        let removed = self.current.take();
        if let Some(anchor) = &removed {
            debug!("AnchorTracker::remove id={:?}", anchor.id);
        }
        removed
    }

    pub fn current(&self) -> Option<&Anchor> {
        self.current.as_ref()
    }

    /// Height of the placed object, used to constrain follow-up queries.
    pub fn reference_height(&self) -> Option<f32> {
        self.current.as_ref().map(Anchor::height)
    }
}
