//! Per-frame simulation step
//!
//! Driven by the host's animation loop with whatever delta it measured.

use super::field::FieldReport;
use super::fish::Direction;
use super::state::{FrameInput, GameState};
use crate::consts::*;

/// Advance the session by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &FrameInput, dt: f32) -> FieldReport {
    // The view survives a reset, so a toggle sent alongside one still applies
    if input.toggle_view {
        state.toggle_view();
    }

    // Reset takes effect before anything else moves
    if input.reset {
        state.reset();
        return FieldReport::default();
    }

    let dt = if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_DT)
    } else {
        0.0
    };
    state.last_dt = dt;
    state.advance_clock(dt);

    let direction = if state.can_control() {
        input.direction
    } else {
        Direction::None
    };
    state.fish.move_dir(direction, dt);

    let mut report = FieldReport::default();
    if !state.is_game_over() {
        let time = state.time;
        let damage_enabled = state.can_control();
        report = state.field.update(dt, time, &mut state.fish, damage_enabled);
        if state.fish.is_dead() {
            state.enter_game_over();
        }
    }

    // Debris keeps getting faster, even after game over
    state.field.accelerate(dt);

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::debris::Debris;
    use crate::sim::state::GamePhase;
    use crate::sim::state::ViewMode;

    const DT: f32 = 1.0 / 60.0;

    /// Run idle frames until the grace period has passed
    fn past_grace(state: &mut GameState) {
        let idle = FrameInput::default();
        while !state.can_control() {
            tick(state, &idle, MAX_FRAME_DT);
        }
    }

    /// Park every debris entity out of reach
    fn clear_field(state: &mut GameState) {
        for i in 0..state.field.len() {
            if let Some(slot) = state.field.slot_mut(i) {
                *slot = Debris {
                    depth: 10_000.0,
                    horz: 60.0,
                    vert: 40.0,
                    ..Default::default()
                };
            }
        }
    }

    fn place_on_fish(state: &mut GameState, index: usize) {
        let (horz, vert) = (state.fish.horz, state.fish.vert);
        if let Some(slot) = state.field.slot_mut(index) {
            *slot = Debris {
                depth: -1.0,
                horz,
                vert,
                ..Default::default()
            };
        }
    }

    #[test]
    fn test_input_ignored_during_grace() {
        let mut state = GameState::new(1);
        let input = FrameInput {
            direction: Direction::Up,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.fish.vert, 0.0);
        assert_eq!(state.fish.vert_tilt, 0.0);
    }

    #[test]
    fn test_input_applies_after_grace() {
        let mut state = GameState::new(1);
        past_grace(&mut state);
        clear_field(&mut state);
        let input = FrameInput {
            direction: Direction::Right,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert!(state.fish.horz > 0.0);

        tick(&mut state, &FrameInput::default(), DT);
        assert_eq!(state.fish.horz_tilt, 0.0);
    }

    #[test]
    fn test_hit_costs_exactly_one_life() {
        let mut state = GameState::new(2);
        past_grace(&mut state);
        clear_field(&mut state);
        place_on_fish(&mut state, 0);

        tick(&mut state, &FrameInput::default(), 0.01);

        assert_eq!(state.fish.lives, MAX_LIVES - 1);
        assert!(state.field.debris()[0].depth >= SPAWN_DISTANCE);
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_no_hit_during_grace() {
        let mut state = GameState::new(2);
        clear_field(&mut state);
        place_on_fish(&mut state, 0);

        tick(&mut state, &FrameInput::default(), 0.01);

        assert_eq!(state.fish.lives, MAX_LIVES);
        assert!(state.field.inbound());
    }

    #[test]
    fn test_last_life_ends_game_same_frame() {
        let mut state = GameState::new(3);
        past_grace(&mut state);
        clear_field(&mut state);
        state.fish.lives = 1;
        place_on_fish(&mut state, 0);

        tick(&mut state, &FrameInput::default(), 0.01);
        assert_eq!(state.fish.lives, 0);
        assert!(state.is_game_over());
        let frozen = state.survival_time();

        // Stays over, field frozen, no further life changes
        let depths: Vec<f32> = state.field.debris().iter().map(|d| d.depth).collect();
        for _ in 0..30 {
            tick(&mut state, &FrameInput::default(), DT);
        }
        assert!(state.is_game_over());
        assert_eq!(state.fish.lives, 0);
        assert_eq!(state.survival_time(), frozen);
        let after: Vec<f32> = state.field.debris().iter().map(|d| d.depth).collect();
        assert_eq!(depths, after);
    }

    #[test]
    fn test_reset_restores_session() {
        let mut state = GameState::new(4);
        past_grace(&mut state);
        clear_field(&mut state);
        state.fish.lives = 1;
        state.fish.horz = 5.0;
        state.fish.vert = -3.0;
        place_on_fish(&mut state, 0);
        tick(&mut state, &FrameInput::default(), 0.01);
        assert!(state.is_game_over());

        let reset = FrameInput {
            reset: true,
            ..Default::default()
        };
        tick(&mut state, &reset, DT);

        assert_eq!(state.fish.lives, MAX_LIVES);
        assert_eq!((state.fish.horz, state.fish.vert), (0.0, 0.0));
        assert!(!state.is_game_over());
        assert_eq!(state.phase, GamePhase::Intro);
        assert_eq!(state.time, 0.0);
        assert_eq!(state.field.wave_period(), DEFAULT_WAVE_PERIOD);
    }

    #[test]
    fn test_wave_period_grows_every_frame() {
        let mut state = GameState::new(5);
        let before = state.field.wave_period();
        for _ in 0..10 {
            tick(&mut state, &FrameInput::default(), 0.05);
        }
        assert!((state.field.wave_period() - before - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_large_and_bad_deltas_are_clamped() {
        let mut state = GameState::new(6);
        tick(&mut state, &FrameInput::default(), 30.0);
        assert!((state.time - MAX_FRAME_DT).abs() < 1e-6);
        tick(&mut state, &FrameInput::default(), f32::NAN);
        tick(&mut state, &FrameInput::default(), -1.0);
        assert!((state.time - MAX_FRAME_DT).abs() < 1e-6);
    }

    #[test]
    fn test_toggle_view() {
        let mut state = GameState::new(7);
        let toggle = FrameInput {
            toggle_view: true,
            ..Default::default()
        };
        tick(&mut state, &toggle, DT);
        assert_eq!(state.view, ViewMode::FishView);
    }

    #[test]
    fn test_toggle_applies_on_reset_frame() {
        let mut state = GameState::new(8);
        tick(&mut state, &FrameInput::default(), DT);
        let both = FrameInput {
            reset: true,
            toggle_view: true,
            ..Default::default()
        };
        let report = tick(&mut state, &both, DT);

        assert_eq!(report, FieldReport::default());
        assert_eq!(state.view, ViewMode::FishView);
        assert_eq!(state.time, 0.0);
        assert_eq!(state.phase, GamePhase::Intro);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = GameState::new(99);
        let mut b = GameState::new(99);
        let inputs = [Direction::Up, Direction::Left, Direction::None, Direction::Down];
        for i in 0..600 {
            let input = FrameInput {
                direction: inputs[i % inputs.len()],
                ..Default::default()
            };
            tick(&mut a, &input, DT);
            tick(&mut b, &input, DT);
        }
        assert_eq!(a.fish, b.fish);
        assert_eq!(a.field.debris(), b.field.debris());
    }
}
