//! Value types exchanged with the host AR framework.
//!
//! The host performs the actual ray intersection against its tracked
//! geometry and tags every hit with a [`DetectionKind`] and an [`Alignment`]
//! before handing the list to the resolver. Nothing here owns state; values
//! are built per query and compared by value.

use nalgebra::Matrix4;
use serde::{Deserialize, Serialize};

/// Orientation class of a detected surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Horizontal,
    Vertical,
}

/// How a surface intersection was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionKind {
    /// Hit against the observed geometry of a tracked plane.
    ConfirmedPlane,
    /// Hit against an estimated vertical plane without extent limit.
    InferredVerticalPlane,
    /// Hit against an estimated horizontal plane without extent limit.
    InferredHorizontalPlane,
}

impl DetectionKind {
    /// True for the unbounded, estimated plane kinds.
    pub fn is_inferred(self) -> bool {
        matches!(
            self,
            DetectionKind::InferredVerticalPlane | DetectionKind::InferredHorizontalPlane
        )
    }
}

/// One candidate surface intersection.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub kind: DetectionKind,
    pub alignment: Alignment,
    /// Distance from the ray origin (metres, non-negative).
    pub distance: f32,
    /// Y component of the intersection point in world space.
    pub world_height: f32,
}

impl Detection {
    pub fn new(
        kind: DetectionKind,
        alignment: Alignment,
        distance: f32,
        world_height: f32,
    ) -> Self {
        Self {
            kind,
            alignment,
            distance,
            world_height,
        }
    }

    /// Build a detection from the world transform reported for the hit.
    pub fn from_world_transform(
        kind: DetectionKind,
        alignment: Alignment,
        distance: f32,
        world_transform: &Matrix4<f32>,
    ) -> Self {
        Self::new(kind, alignment, distance, world_transform[(1, 3)])
    }
}

/// Subset of {horizontal, vertical} restricting which detections are eligible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Alignment>", into = "Vec<Alignment>")]
pub struct AlignmentFilter {
    horizontal: bool,
    vertical: bool,
}

impl AlignmentFilter {
    pub const EMPTY: Self = Self {
        horizontal: false,
        vertical: false,
    };
    pub const HORIZONTAL: Self = Self {
        horizontal: true,
        vertical: false,
    };
    pub const VERTICAL: Self = Self {
        horizontal: false,
        vertical: true,
    };
    pub const ANY: Self = Self {
        horizontal: true,
        vertical: true,
    };

    pub fn contains(self, alignment: Alignment) -> bool {
        match alignment {
            Alignment::Horizontal => self.horizontal,
            Alignment::Vertical => self.vertical,
        }
    }

    pub fn is_empty(self) -> bool {
        !self.horizontal && !self.vertical
    }

    /// Returns a copy of the filter with `alignment` added.
    pub fn with(mut self, alignment: Alignment) -> Self {
        match alignment {
            Alignment::Horizontal => self.horizontal = true,
            Alignment::Vertical => self.vertical = true,
        }
        self
    }
}

impl Default for AlignmentFilter {
    fn default() -> Self {
        Self::ANY
    }
}

impl FromIterator<Alignment> for AlignmentFilter {
    fn from_iter<I: IntoIterator<Item = Alignment>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl From<Vec<Alignment>> for AlignmentFilter {
    fn from(alignments: Vec<Alignment>) -> Self {
        alignments.into_iter().collect()
    }
}

impl From<AlignmentFilter> for Vec<Alignment> {
    fn from(filter: AlignmentFilter) -> Self {
        let mut out = Vec::with_capacity(2);
        if filter.horizontal {
            out.push(Alignment::Horizontal);
        }
        if filter.vertical {
            out.push(Alignment::Vertical);
        }
        out
    }
}
