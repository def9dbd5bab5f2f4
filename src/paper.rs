//! Grid of paper patches covering the painting.
//!
//! The painting's local XZ plane is split into `cols x rows` patches centred
//! on the origin. Touch points hit-tested by the host against the artwork are
//! mapped to patches which are torn off one by one until the painting is
//! fully revealed. Column index grows with X, row index with Z.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Index of a patch as `(col, row)`.
pub type PatchIndex = (usize, usize);

/// Patches per side of the default lattice.
pub const DEFAULT_DIVISIONS: usize = 25;

/// Paper overlay layout, in the painting's local units.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaperParams {
    pub width: f32,
    pub depth: f32,
    pub cols: usize,
    pub rows: usize,
    /// Reach of a single touch when tearing patches off.
    pub scratch_radius: f32,
}

impl Default for PaperParams {
    fn default() -> Self {
        Self {
            width: 0.6,
            depth: 0.8,
            cols: DEFAULT_DIVISIONS,
            rows: DEFAULT_DIVISIONS,
            scratch_radius: 0.04,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperGrid {
    width: f32,
    depth: f32,
    cols: usize,
    rows: usize,
    intact: Vec<bool>,
    remaining: usize,
}

impl PaperGrid {
    pub fn new(width: f32, depth: f32, cols: usize, rows: usize) -> Result<Self, String> {
        if !(width.is_finite() && width > 0.0 && depth.is_finite() && depth > 0.0) {
            return Err(format!("Invalid paper extent {width}x{depth}: must be positive"));
        }
        let total = match cols.checked_mul(rows) {
            Some(total) if total > 0 => total,
            Some(_) => {
                return Err(format!("Invalid paper grid {cols}x{rows}: needs at least one patch"))
            }
            None => return Err(format!("Invalid paper grid {cols}x{rows}: too many patches")),
        };
        Ok(Self {
            width,
            depth,
            cols,
            rows,
            intact: vec![true; total],
            remaining: total,
        })
    }

    /// Grid covering `params.width x params.depth` with the configured lattice.
    pub fn from_params(params: &PaperParams) -> Result<Self, String> {
        Self::new(params.width, params.depth, params.cols, params.rows)
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    pub fn total(&self) -> usize {
        self.intact.len()
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn cleared_fraction(&self) -> f32 {
        1.0 - self.remaining as f32 / self.total() as f32
    }

    pub fn is_cleared(&self) -> bool {
        self.remaining == 0
    }

    pub fn is_intact(&self, (col, row): PatchIndex) -> bool {
        col < self.cols && row < self.rows && self.intact[row * self.cols + col]
    }

    /// Patch containing the local point, `None` outside the painting.
    pub fn patch_at(&self, x: f32, z: f32) -> Option<PatchIndex> {
        let u = (x + 0.5 * self.width) / self.width;
        let v = (z + 0.5 * self.depth) / self.depth;
        if !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v) {
            return None;
        }
        let col = ((u * self.cols as f32) as usize).min(self.cols - 1);
        let row = ((v * self.rows as f32) as usize).min(self.rows - 1);
        Some((col, row))
    }

    pub fn patch_center(&self, (col, row): PatchIndex) -> Point2<f32> {
        let cw = self.width / self.cols as f32;
        let cd = self.depth / self.rows as f32;
        Point2::new(
            -0.5 * self.width + (col as f32 + 0.5) * cw,
            -0.5 * self.depth + (row as f32 + 0.5) * cd,
        )
    }

    /// Tear off the patch under the point. Returns `true` if it was intact.
    pub fn scratch(&mut self, x: f32, z: f32) -> bool {
        match self.patch_at(x, z) {
            Some(idx) => self.tear(idx),
            None => false,
        }
    }

    /// Tear off every intact patch whose centre lies within `radius` of the
    /// point; returns how many were removed.
    pub fn scratch_radius(&mut self, x: f32, z: f32, radius: f32) -> usize {
        let touch = Point2::new(x, z);
        let mut torn = 0;
        for row in 0..self.rows {
            for col in 0..self.cols {
                if nalgebra::distance(&self.patch_center((col, row)), &touch) <= radius
                    && self.tear((col, row))
                {
                    torn += 1;
                }
            }
        }
        if torn > 0 {
            log::debug!(
                "PaperGrid::scratch_radius torn={} remaining={}/{}",
                torn,
                self.remaining,
                self.total()
            );
        }
        torn
    }

    fn tear(&mut self, (col, row): PatchIndex) -> bool {
        let slot = &mut self.intact[row * self.cols + col];
        if !*slot {
            return false;
        }
        *slot = false;
        self.remaining -= 1;
        true
    }
}
