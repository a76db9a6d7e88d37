//! Camera and lighting

use glam::{Mat4, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::hex_color;
use crate::sim::Fish;

/// Vertical field of view (radians)
pub const FOV_Y: f32 = std::f32::consts::PI / 5.0;
pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 1000.0;

/// Where the chase camera settles once the intro swing has finished
const CHASE_REST_X: f32 = -20.0;

/// Look-at camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Camera {
    /// Behind the fish. During the intro the eye swings round from in front.
    pub fn chase(fish: &Fish, time: f32, dt: f32, reduced_motion: bool) -> Self {
        let x = if reduced_motion {
            CHASE_REST_X
        } else {
            (30.0 - time * 10.0).max(CHASE_REST_X)
        };
        let z = 1.0 / ((time * 0.001).powi(2) + 1.0);
        Self {
            eye: Vec3::new(x, 2.0 - 1.5 * fish.vert * dt, z),
            target: Vec3::new(0.0, fish.vert / 2.0, fish.horz / 3.0),
            up: Vec3::Y,
        }
    }

    /// Side-on view level with the fish
    pub fn fish_view(fish: &Fish) -> Self {
        Self {
            eye: Vec3::new(8.0, fish.vert, 0.0),
            target: Vec3::new(0.0, fish.vert, fish.horz),
            up: Vec3::Y,
        }
    }

    /// World to camera
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Camera to world; anchors screen-space UI
    pub fn screen_matrix(&self) -> Mat4 {
        self.view_matrix().inverse()
    }

    pub fn projection(aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(FOV_Y, aspect.max(f32::EPSILON), NEAR, FAR)
    }
}

pub const LIGHT_COLOR: &str = "#75c1ff";
pub const GAME_OVER_LIGHT_COLOR: &str = "#ff0000";

/// Point light
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec4,
    pub color: Vec3,
    /// Attenuation size
    pub size: f32,
}

impl Light {
    /// Overhead light drifting with time; turns red once the game is over
    pub fn for_frame(time: f32, game_over: bool) -> Self {
        let angle = std::f32::consts::TAU * time;
        let color = if game_over {
            GAME_OVER_LIGHT_COLOR
        } else {
            LIGHT_COLOR
        };
        Self {
            position: Vec4::new(angle.tan() / 1000.0, 300.0, 4.0 * (angle / 2.0).cos(), 1.0),
            color: hex_color(color),
            size: 1.0e15,
        }
    }
}
