//! Proximity tests between the fish and debris
//!
//! Debris flies along the depth axis toward the fish, so a hit is a planar
//! (vertical, horizontal) overlap gated by a depth window. Depth never enters
//! the distance itself.

use glam::Vec2;

use crate::consts::*;

/// Planar distance between two (horizontal, vertical) positions
#[inline]
pub fn planar_distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Depth lies in the pre-impact approach window
#[inline]
pub fn in_approach_window(depth: f32) -> bool {
    depth > APPROACH_MIN_DEPTH && depth < APPROACH_MAX_DEPTH
}

/// Depth lies in the window where a hit costs a life
#[inline]
pub fn in_impact_window(depth: f32) -> bool {
    depth > IMPACT_MIN_DEPTH && depth < IMPACT_MAX_DEPTH
}

/// True if the planar positions overlap and the depth is in the approach window
pub fn on_collision_course(fish: Vec2, debris: Vec2, debris_depth: f32) -> bool {
    planar_distance(fish, debris) < COLLISION_RADIUS && in_approach_window(debris_depth)
}
