//! The player's fish

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision;
use super::debris::Debris;
use crate::consts::*;

/// Swim direction for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map a keyboard key to a direction (w/a/s/d and arrows)
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" | "W" | "ArrowUp" => Some(Direction::Up),
            "s" | "S" | "ArrowDown" => Some(Direction::Down),
            "a" | "A" | "ArrowLeft" => Some(Direction::Left),
            "d" | "D" | "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Decode the integer direction code an embedding host may send instead
    /// of key names (1 left, 2 right, 3 up, 4 down).
    ///
    /// Malformed codes are not an error: they decode to `None`, so the fish
    /// simply holds still.
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => Direction::Left,
            2 => Direction::Right,
            3 => Direction::Up,
            4 => Direction::Down,
            _ => Direction::None,
        }
    }
}

/// The player-controlled fish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fish {
    pub vert: f32,
    pub horz: f32,
    /// Visual only
    pub vert_tilt: f32,
    pub horz_tilt: f32,
    pub lives: u8,
}

impl Default for Fish {
    fn default() -> Self {
        Self {
            vert: 0.0,
            horz: 0.0,
            vert_tilt: 0.0,
            horz_tilt: 0.0,
            lives: MAX_LIVES,
        }
    }
}

impl Fish {
    /// Planar position as (horizontal, vertical)
    pub fn planar(&self) -> Vec2 {
        Vec2::new(self.horz, self.vert)
    }

    /// Swim toward one edge for `dt` seconds, clamped to the play area
    pub fn move_dir(&mut self, direction: Direction, dt: f32) {
        let step = FISH_MOVE_RATE * dt.max(0.0);
        match direction {
            Direction::Up => {
                self.vert = (self.vert + step).min(VERT_RANGE);
                self.vert_tilt = FISH_TILT;
            }
            Direction::Down => {
                self.vert = (self.vert - step).max(-VERT_RANGE);
                self.vert_tilt = -FISH_TILT;
            }
            Direction::Left => {
                self.horz = (self.horz - step).max(-HORZ_RANGE);
                self.horz_tilt = -FISH_TILT;
            }
            Direction::Right => {
                self.horz = (self.horz + step).min(HORZ_RANGE);
                self.horz_tilt = FISH_TILT;
            }
            Direction::None => {
                self.vert_tilt = 0.0;
                self.horz_tilt = 0.0;
            }
        }
    }

    /// Debris is on a collision course with the fish
    pub fn check_collision(&self, debris: &Debris) -> bool {
        collision::on_collision_course(self.planar(), debris.planar(), debris.depth)
    }

    pub fn is_dead(&self) -> bool {
        self.lives == 0
    }

    /// Lose one life; returns true if that was the last one
    pub fn take_hit(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.is_dead()
    }
}
