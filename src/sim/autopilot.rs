//! Idle/demo steering
//!
//! Plays the game without a player: dodges the nearest debris heading for the
//! fish and otherwise drifts back toward the middle of the play area.

use glam::Vec2;

use super::fish::Direction;
use super::state::GameState;
use crate::consts::*;

/// Depth at which the autopilot starts reacting to debris
const LOOKAHEAD_DEPTH: f32 = 25.0;
/// Extra planar clearance kept around the collision radius
const CLEARANCE: f32 = 1.5;
/// Distance from the middle tolerated when nothing is inbound
const HOME_SLACK: f32 = 1.0;

/// Pick a swim direction for this frame
pub fn steer(state: &GameState) -> Direction {
    if !state.can_control() {
        return Direction::None;
    }

    let fish = state.fish.planar();
    let threat = state
        .field
        .debris()
        .iter()
        .filter(|d| d.depth > APPROACH_MIN_DEPTH && d.depth < LOOKAHEAD_DEPTH)
        .filter(|d| fish.distance(d.planar()) < COLLISION_RADIUS + CLEARANCE)
        .min_by(|a, b| a.depth.total_cmp(&b.depth));

    match threat {
        Some(debris) => evade(fish, debris.planar()),
        None => home(fish),
    }
}

/// Move away from `obstacle`, along the axis that already has more separation
fn evade(fish: Vec2, obstacle: Vec2) -> Direction {
    let away = fish - obstacle;

    let horz = if away.x >= 0.0 {
        (Direction::Right, fish.x < HORZ_RANGE)
    } else {
        (Direction::Left, fish.x > -HORZ_RANGE)
    };
    let vert = if away.y >= 0.0 {
        (Direction::Up, fish.y < VERT_RANGE)
    } else {
        (Direction::Down, fish.y > -VERT_RANGE)
    };

    let (first, second) = if away.x.abs() >= away.y.abs() {
        (horz, vert)
    } else {
        (vert, horz)
    };

    if first.1 {
        first.0
    } else if second.1 {
        second.0
    } else {
        // Pinned in a corner: cut back across the wider axis
        if fish.x > 0.0 {
            Direction::Left
        } else {
            Direction::Right
        }
    }
}

fn home(fish: Vec2) -> Direction {
    if fish.length() <= HOME_SLACK {
        Direction::None
    } else if fish.x.abs() >= fish.y.abs() {
        if fish.x > 0.0 {
            Direction::Left
        } else {
            Direction::Right
        }
    } else if fish.y > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::debris::Debris;
    use crate::sim::state::FrameInput;
    use crate::sim::tick;

    fn playing_state() -> GameState {
        let mut state = GameState::new(8);
        while !state.can_control() {
            tick(&mut state, &FrameInput::default(), MAX_FRAME_DT);
        }
        for i in 0..state.field.len() {
            if let Some(slot) = state.field.slot_mut(i) {
                slot.depth = 10_000.0;
            }
        }
        state
    }

    #[test]
    fn test_idle_when_centered_and_clear() {
        let state = playing_state();
        assert_eq!(steer(&state), Direction::None);
    }

    #[test]
    fn test_no_steering_during_grace() {
        let state = GameState::new(8);
        assert_eq!(steer(&state), Direction::None);
    }

    #[test]
    fn test_dodges_away_from_debris() {
        let mut state = playing_state();
        if let Some(slot) = state.field.slot_mut(0) {
            *slot = Debris {
                depth: 8.0,
                horz: 1.0,
                vert: 0.2,
                ..Default::default()
            };
        }
        assert_eq!(steer(&state), Direction::Left);
    }

    #[test]
    fn test_nearest_threat_wins() {
        let mut state = playing_state();
        if let Some(slot) = state.field.slot_mut(0) {
            *slot = Debris {
                depth: 20.0,
                horz: 1.0,
                ..Default::default()
            };
        }
        if let Some(slot) = state.field.slot_mut(1) {
            *slot = Debris {
                depth: 4.0,
                vert: -1.0,
                ..Default::default()
            };
        }
        assert_eq!(steer(&state), Direction::Up);
    }

    #[test]
    fn test_blocked_axis_falls_back() {
        let fish = Vec2::new(HORZ_RANGE, 0.0);
        // Obstacle to the left wants Right, but the fish is at the edge
        assert_eq!(evade(fish, Vec2::new(HORZ_RANGE - 1.0, 0.5)), Direction::Down);
    }

    #[test]
    fn test_returns_home() {
        assert_eq!(home(Vec2::new(5.0, 1.0)), Direction::Left);
        assert_eq!(home(Vec2::new(0.0, -4.0)), Direction::Up);
    }
}
