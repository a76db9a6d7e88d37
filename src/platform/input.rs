//! Keyboard input
//!
//! Key events arrive as immediate callbacks between frames. `Controls` folds
//! them into one `FrameInput` per frame: the most recently pressed direction
//! that is still held, plus any one-shot commands.

use crate::sim::{Direction, FrameInput};

/// One-shot commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Reset,
    ToggleView,
}

impl Command {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "r" | "R" => Some(Command::Reset),
            "f" | "F" => Some(Command::ToggleView),
            _ => None,
        }
    }
}

/// Held-key tracker
#[derive(Debug, Clone, Default)]
pub struct Controls {
    /// Held directions, oldest first
    held: Vec<Direction>,
    reset: bool,
    toggle_view: bool,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press; returns false for keys the game ignores
    pub fn key_down(&mut self, key: &str) -> bool {
        if let Some(direction) = Direction::from_key(key) {
            // Auto-repeat re-sends keydown; keep the first press position
            if !self.held.contains(&direction) {
                self.held.push(direction);
            }
            return true;
        }
        match Command::from_key(key) {
            Some(Command::Reset) => self.reset = true,
            Some(Command::ToggleView) => self.toggle_view = true,
            None => return false,
        }
        true
    }

    pub fn key_up(&mut self, key: &str) {
        if let Some(direction) = Direction::from_key(key) {
            self.held.retain(|d| *d != direction);
        }
    }

    /// Forget held keys (focus lost, key-up events will not arrive)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn current_direction(&self) -> Direction {
        self.held.last().copied().unwrap_or_default()
    }

    /// Build this frame's input and clear one-shot commands
    pub fn take_frame_input(&mut self) -> FrameInput {
        let input = FrameInput {
            direction: self.current_direction(),
            reset: self.reset,
            toggle_view: self.toggle_view,
        };
        self.reset = false;
        self.toggle_view = false;
        input
    }
}
