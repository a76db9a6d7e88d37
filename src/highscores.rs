//! Best survival times
//!
//! Persisted to LocalStorage, tracks the top 10 runs by seconds survived
//! after the grace period.

use serde::{Deserialize, Serialize};

/// Maximum number of entries to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single leaderboard entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Seconds survived
    pub survival_time: f32,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// Survival time leaderboard, sorted longest first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "ocean_commotion_highscores";

    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a run qualifies for the leaderboard
    pub fn qualifies(&self, survival_time: f32) -> bool {
        if survival_time.is_nan() || survival_time <= 0.0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries
            .last()
            .map(|e| survival_time > e.survival_time)
            .unwrap_or(true)
    }

    /// Add a run; returns the rank achieved (1-indexed) or None
    pub fn add_run(&mut self, survival_time: f32, timestamp: f64) -> Option<usize> {
        if !self.qualifies(survival_time) {
            return None;
        }

        let entry = HighScoreEntry {
            survival_time,
            timestamp,
        };

        let pos = self
            .entries
            .iter()
            .position(|e| survival_time > e.survival_time);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Longest survival time (if any)
    pub fn best(&self) -> Option<f32> {
        self.entries.first().map(|e| e.survival_time)
    }

    /// Load from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(scores) = serde_json::from_str::<HighScores>(&json) {
                    log::info!("Loaded {} best times", scores.entries.len());
                    return scores;
                }
                log::warn!("Stored best times unreadable, starting fresh");
            }
        }

        Self::new()
    }

    /// Save to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Best times saved ({} entries)", self.entries.len());
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

/// Format seconds as `m:ss.t`
pub fn format_time(seconds: f32) -> String {
    let tenths = (seconds.max(0.0) * 10.0).round() as u64;
    let minutes = tenths / 600;
    let secs = (tenths % 600) / 10;
    format!("{}:{:02}.{}", minutes, secs, tenths % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_longest_first() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_run(10.0, 0.0), Some(1));
        assert_eq!(scores.add_run(30.0, 0.0), Some(1));
        assert_eq!(scores.add_run(20.0, 0.0), Some(2));
        assert_eq!(scores.best(), Some(30.0));
    }

    #[test]
    fn test_zero_and_nan_never_qualify() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_run(0.0, 0.0), None);
        assert_eq!(scores.add_run(f32::NAN, 0.0), None);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_truncates_to_max() {
        let mut scores = HighScores::new();
        for i in 1..=15 {
            scores.add_run(i as f32, 0.0);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert!(!scores.qualifies(5.0));
        assert!(scores.qualifies(100.0));
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00.0");
        assert_eq!(format_time(75.25), "1:15.3");
    }
}
