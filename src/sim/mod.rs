//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - Session-owned state only (no globals)
//! - Seeded RNG only
//! - Stable iteration order (debris pool slot order)

pub mod autopilot;
pub mod collision;
pub mod debris;
pub mod field;
pub mod fish;
pub mod state;
pub mod tick;

pub use collision::on_collision_course;
pub use debris::{Debris, DebrisKind};
pub use field::{DebrisField, FieldReport};
pub use fish::{Direction, Fish};
pub use state::{FrameInput, GamePhase, GameState, SessionSnapshot, ViewMode};
pub use tick::tick;
