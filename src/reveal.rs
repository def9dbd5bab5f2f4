//! Timer-driven scratch-off reveal of the painting cover.
//!
//! A cover textured with the painting sits slightly above the artwork. On
//! every tick its texture is cropped by `step_px` more rows, the cover shrinks
//! along its depth and slides so the uncovered edge stays put. The step
//! counter ping-pongs between 0 and `max_steps`, so the cover keeps peeling
//! back and growing again for as long as the host timer runs.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RevealParams {
    /// Host timer period; informational for the host scheduler.
    pub tick_interval_ms: u64,
    /// Texture rows removed per step (pixels).
    pub step_px: f32,
    /// Turning point of the ping-pong counter.
    pub max_steps: u32,
    /// Height of the cover above the artwork (metres).
    pub cover_elevation: f32,
}

impl Default for RevealParams {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            step_px: 20.0,
            max_steps: 30,
            cover_elevation: 0.015,
        }
    }
}

/// Cover state for one tick.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealFrame {
    pub step: u32,
    /// Rows of the painting texture still shown on the cover.
    pub crop_height: f32,
    /// Scale of the cover along its depth axis, in `[0, 1]`.
    pub scale_z: f32,
    /// Local position of the cover relative to the artwork.
    pub position: Vector3<f32>,
}

#[derive(Clone, Debug)]
pub struct RevealCycle {
    image_height: f32,
    cover_depth: f32,
    params: RevealParams,
    step: u32,
    increasing: bool,
}

impl RevealCycle {
    /// `image_height` is the painting texture height in pixels, `cover_depth`
    /// the extent of the framed artwork along its depth axis.
    pub fn new(image_height: f32, cover_depth: f32, params: RevealParams) -> Result<Self, String> {
        if !(image_height.is_finite() && image_height > 0.0) {
            return Err(format!("Invalid image height {image_height}: must be positive"));
        }
        if !(cover_depth.is_finite() && cover_depth >= 0.0) {
            return Err(format!("Invalid cover depth {cover_depth}: must be non-negative"));
        }
        if !(params.step_px.is_finite() && params.step_px >= 0.0) {
            return Err(format!("Invalid reveal step {}px", params.step_px));
        }
        if params.max_steps == 0 {
            log::warn!("RevealCycle: max_steps=0 -> cover never moves");
        }
        Ok(Self {
            image_height,
            cover_depth,
            params,
            step: 0,
            increasing: true,
        })
    }

    pub fn params(&self) -> &RevealParams {
        &self.params
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// Frame for the current step, without advancing.
    pub fn frame(&self) -> RevealFrame {
        let removed = (self.params.step_px * self.step as f32).min(self.image_height);
        let fraction = removed / self.image_height;
        RevealFrame {
            step: self.step,
            crop_height: self.image_height - removed,
            scale_z: 1.0 - fraction,
            position: Vector3::new(0.0, self.params.cover_elevation, self.cover_depth * fraction),
        }
    }

    /// Emit the frame for the current step, then advance the counter.
    pub fn tick(&mut self) -> RevealFrame {
        let frame = self.frame();
        self.advance();
        frame
    }

    fn advance(&mut self) {
        let max = self.params.max_steps;
        if max == 0 {
            return;
        }
        if self.increasing {
            self.step += 1;
        } else {
            self.step = self.step.saturating_sub(1);
        }
        if self.step >= max {
            self.increasing = false;
        }
        if self.step == 0 {
            self.increasing = true;
        }
    }
}
