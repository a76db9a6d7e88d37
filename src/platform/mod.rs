//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (keyboard to per-frame commands)

pub mod input;

pub use input::{Command, Controls};
