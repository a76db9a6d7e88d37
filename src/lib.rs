//! Ocean Commotion - a flying fish dodging drifting debris
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (fish, debris pool, collisions, session state)
//! - `scene`: World transforms handed to the host renderer
//! - `platform`: Browser/native input mapping
//! - `settings`: Persisted player preferences
//! - `highscores`: Best survival times

pub mod highscores;
pub mod platform;
pub mod scene;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Fish movement bounds
    pub const VERT_RANGE: f32 = 6.0;
    pub const HORZ_RANGE: f32 = 9.0;
    /// Depth span used when scattering respawned debris
    pub const DEPTH_RANGE: f32 = 20.0;

    /// Fish swim speed (units per second along one axis)
    pub const FISH_MOVE_RATE: f32 = 60.0;
    /// Visual tilt applied on the axis last moved
    pub const FISH_TILT: f32 = 0.2;
    pub const MAX_LIVES: u8 = 3;

    /// Planar radius inside which debris is on a collision course
    pub const COLLISION_RADIUS: f32 = 2.0;
    /// Depth window for "inbound" debris (exclusive bounds)
    pub const APPROACH_MIN_DEPTH: f32 = -3.0;
    pub const APPROACH_MAX_DEPTH: f32 = 10.0;
    /// Depth window where inbound debris actually hits (exclusive bounds)
    pub const IMPACT_MIN_DEPTH: f32 = -2.0;
    pub const IMPACT_MAX_DEPTH: f32 = 0.0;

    /// Debris pool size
    pub const DEBRIS_COUNT: usize = 300;
    /// Session start: no control, no damage
    pub const GRACE_PERIOD: f32 = 5.5;
    /// Initial drift rate; grows by one unit per second of play
    pub const DEFAULT_WAVE_PERIOD: f32 = 30.0;
    /// Respawn depth for recycled debris
    pub const SPAWN_DISTANCE: f32 = 100.0;
    /// Respawn depth used when a session (re)starts
    pub const RESET_SPAWN_DEPTH: f32 = 200.0;

    /// Debris far behind the camera is recycled
    pub const RECYCLE_FLOOR_DEPTH: f32 = -100.0;
    /// Debris past this depth and near the view axis is recycled early
    pub const CAMERA_BAND_DEPTH: f32 = -10.0;
    pub const CAMERA_BAND_HORZ: f32 = 2.0;
    pub const CAMERA_BAND_VERT: f32 = 1.0;

    /// Per-second decay pulling debris toward the axis
    pub const DEBRIS_DAMPING: f32 = 0.08;
    /// Oscillation amplitude of the bounce/sway terms
    pub const DEBRIS_WOBBLE: f32 = 0.1;

    /// Probability that a respawned debris is a skull
    pub const SKULL_CHANCE: f64 = 0.1;
}

/// Parse a `#rrggbb` colour literal into RGB components in [0, 1]
pub fn hex_color(hex: &str) -> glam::Vec3 {
    let digits = hex.trim_start_matches('#');
    let channel = |i: usize| {
        digits
            .get(i..i + 2)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .map_or(0.0, |v| v as f32 / 255.0)
    };
    glam::Vec3::new(channel(0), channel(2), channel(4))
}
