//! Drifting debris entities
//!
//! Debris is never created or destroyed during a session. Each entity drifts
//! toward the camera along the depth axis and is respawned in place, with
//! fresh random parameters, once it has passed the fish.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Cosmetic debris type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DebrisKind {
    #[default]
    Mine,
    Skull,
}

/// Horizontal fill span multiplier (relative to the fish range)
const FILL_MULT_HORZ: f32 = 8.0;
/// Vertical fill span multiplier, scaled by the aspect of the play area
const FILL_MULT_VERT: f32 = FILL_MULT_HORZ * VERT_RANGE / HORZ_RANGE;
/// Depth scatter multiplier
const FILL_MULT_DEPTH: f32 = 10.0;

/// Upper bound (exclusive) of the bounce phase multiplier
pub const MAX_BOUNCE_OFFSET: f32 = 2.0;
/// Upper bound (exclusive) of the sway phase multiplier
pub const MAX_SWAY_OFFSET: f32 = 3.0;
/// Tilt rate factor on the y/z axes
const SPIN_RATE: f32 = 1.0005;

/// One pooled obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debris {
    pub depth: f32,
    pub vert: f32,
    pub horz: f32,
    /// Accumulated rotation angles (unbounded)
    pub tilt_x: f32,
    pub tilt_y: f32,
    pub tilt_z: f32,
    /// Phase multiplier in [0, 2), fixed at spawn
    pub bounce_offset: f32,
    /// Phase multiplier in [0, 3), fixed at spawn
    pub sway_offset: f32,
    pub kind: DebrisKind,
}

impl Default for Debris {
    fn default() -> Self {
        Self {
            depth: RESET_SPAWN_DEPTH,
            vert: 0.0,
            horz: 0.0,
            tilt_x: 0.0,
            tilt_y: 0.0,
            tilt_z: 0.0,
            bounce_offset: 0.0,
            sway_offset: 0.0,
            kind: DebrisKind::Mine,
        }
    }
}

impl Debris {
    /// Create a debris entity already scattered beyond `min_depth`
    pub fn spawned<R: Rng + ?Sized>(min_depth: f32, rng: &mut R) -> Self {
        let mut debris = Self::default();
        debris.respawn(min_depth, rng);
        debris
    }

    /// Planar position as (horizontal, vertical)
    pub fn planar(&self) -> Vec2 {
        Vec2::new(self.horz, self.vert)
    }

    /// Advance drift, oscillation and spin by `dt` seconds.
    ///
    /// `drift_rate` is the shared wave period; `time` is session time and
    /// drives the bounce/sway oscillation.
    pub fn advance(&mut self, dt: f32, drift_rate: f32, time: f32) {
        let damping = (1.0 - DEBRIS_DAMPING * dt).max(0.0);

        self.depth -= drift_rate * dt;
        self.vert = (self.vert + DEBRIS_WOBBLE * (time * self.bounce_offset).sin()) * damping;
        self.horz = (self.horz + DEBRIS_WOBBLE * (time * self.sway_offset).cos()) * damping;

        self.tilt_x += dt * self.bounce_offset * self.sway_offset;
        self.tilt_y += SPIN_RATE * dt * self.bounce_offset;
        self.tilt_z += SPIN_RATE * dt * self.sway_offset;
    }

    /// Reposition at a random depth beyond `min_depth` with fresh phases,
    /// spin and kind
    pub fn respawn<R: Rng + ?Sized>(&mut self, min_depth: f32, rng: &mut R) {
        use std::f32::consts::PI;

        self.horz = -HORZ_RANGE * FILL_MULT_HORZ
            + 2.0 * FILL_MULT_HORZ * HORZ_RANGE * rng.random::<f32>();
        self.vert = -VERT_RANGE * FILL_MULT_VERT * 0.25
            + 1.75 * FILL_MULT_VERT * VERT_RANGE * rng.random::<f32>();
        self.depth = min_depth + FILL_MULT_DEPTH * DEPTH_RANGE * rng.random::<f32>();
        self.bounce_offset = MAX_BOUNCE_OFFSET * rng.random::<f32>();
        self.sway_offset = MAX_SWAY_OFFSET * rng.random::<f32>();
        self.tilt_x = rng.random::<f32>() * PI;
        self.tilt_y = rng.random::<f32>() * PI;
        self.tilt_z = rng.random::<f32>() * PI;
        self.kind = if rng.random_bool(SKULL_CHANCE) {
            DebrisKind::Skull
        } else {
            DebrisKind::Mine
        };
    }

    /// Far behind the camera, or about to pass straight through the viewpoint
    pub fn needs_recycle(&self) -> bool {
        if self.depth < RECYCLE_FLOOR_DEPTH {
            return true;
        }
        self.depth < CAMERA_BAND_DEPTH
            && self.horz.abs() < CAMERA_BAND_HORZ
            && self.vert.abs() < CAMERA_BAND_VERT
    }
}
