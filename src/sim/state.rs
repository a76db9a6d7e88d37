//! Session state
//!
//! One `GameState` per play session. Everything a frame reads or writes lives
//! here, so independent sessions never share state.

use serde::{Deserialize, Serialize};

use super::field::DebrisField;
use super::fish::{Direction, Fish};
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Grace period: camera swings in, fish is invulnerable and not controllable
    Intro,
    /// Active play
    Playing,
    /// Out of lives; terminal until reset
    GameOver,
}

/// Camera mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    /// Behind the fish, following it loosely
    #[default]
    Chase,
    /// Side-on view that tracks the fish
    FishView,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Chase => ViewMode::FishView,
            ViewMode::FishView => ViewMode::Chase,
        }
    }
}

/// Commands for a single frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Held swim direction (`None` when no key is held)
    pub direction: Direction,
    /// Restart the session
    pub reset: bool,
    /// Switch between chase and fish view
    pub toggle_view: bool,
}

/// Serializable HUD summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub lives: u8,
    pub phase: GamePhase,
    pub game_over: bool,
    pub time: f32,
    pub survival_time: f32,
    pub inbound: bool,
    pub view: ViewMode,
    pub wave_period: f32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub seed: u64,
    pub fish: Fish,
    pub field: DebrisField,
    pub phase: GamePhase,
    pub view: ViewMode,
    /// Seconds since the session (re)started
    pub time: f32,
    /// Delta of the last frame, after clamping
    pub last_dt: f32,
    /// Seconds played after the grace period, frozen at game over
    survival_time: f32,
    grace_period: f32,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, &Settings::default())
    }

    pub fn with_settings(seed: u64, settings: &Settings) -> Self {
        let settings = settings.sanitized();
        let view = if settings.fish_view {
            ViewMode::FishView
        } else {
            ViewMode::Chase
        };
        Self {
            seed,
            fish: Fish::default(),
            field: DebrisField::with_wave_period(
                settings.debris_count,
                seed,
                settings.start_wave_period,
            ),
            phase: GamePhase::Intro,
            view,
            time: 0.0,
            last_dt: 0.0,
            survival_time: 0.0,
            grace_period: settings.grace_period,
        }
    }

    /// Restart in place: fish, debris, drift rate, clock and grace period.
    /// The camera mode is kept.
    pub fn reset(&mut self) {
        self.fish = Fish::default();
        self.field.reset();
        self.phase = GamePhase::Intro;
        self.time = 0.0;
        self.last_dt = 0.0;
        self.survival_time = 0.0;
        log::info!("Session reset (seed {})", self.seed);
    }

    pub fn grace_period(&self) -> f32 {
        self.grace_period
    }

    /// Grace period has elapsed
    pub fn grace_elapsed(&self) -> bool {
        self.time > self.grace_period
    }

    /// Player input is applied and damage is taken
    pub fn can_control(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn survival_time(&self) -> f32 {
        self.survival_time
    }

    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
        log::info!("View: {:?}", self.view);
    }

    /// Advance the clock and move between Intro and Playing
    pub(crate) fn advance_clock(&mut self, dt: f32) {
        self.time += dt;
        if self.phase == GamePhase::Intro && self.grace_elapsed() {
            self.phase = GamePhase::Playing;
            log::info!("Grace period over, fish under control");
        }
        if self.phase == GamePhase::Playing {
            self.survival_time = (self.time - self.grace_period).max(0.0);
        }
    }

    pub(crate) fn enter_game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        log::info!("Game over after {:.1}s", self.survival_time);
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            lives: self.fish.lives,
            phase: self.phase,
            game_over: self.is_game_over(),
            time: self.time,
            survival_time: self.survival_time,
            inbound: self.field.inbound(),
            view: self.view,
            wave_period: self.field.wave_period(),
        }
    }
}
