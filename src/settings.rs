//! Game settings and preferences
//!
//! Persisted in LocalStorage on the web; natively the defaults are used.

use serde::{Deserialize, Serialize};

use crate::consts::{DEBRIS_COUNT, DEFAULT_WAVE_PERIOD, GRACE_PERIOD};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Gameplay ===
    /// Size of the debris pool
    pub debris_count: usize,
    /// Seconds of invulnerability at session start
    pub grace_period: f32,
    /// Drift rate debris starts with
    pub start_wave_period: f32,

    // === View ===
    /// Start in the side-on fish view
    pub fish_view: bool,
    /// Draw the aiming crosshair ahead of the fish
    pub show_crosshair: bool,

    // === Accessibility ===
    /// Reduced motion (no camera swing-in, no fish wobble)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debris_count: DEBRIS_COUNT,
            grace_period: GRACE_PERIOD,
            start_wave_period: DEFAULT_WAVE_PERIOD,

            fish_view: false,
            show_crosshair: true,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Copy with every field pulled into a playable range
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let finite_or = |v: f32, fallback: f32| if v.is_finite() { v } else { fallback };
        Self {
            debris_count: self.debris_count.clamp(1, 2000),
            grace_period: finite_or(self.grace_period, defaults.grace_period).clamp(0.0, 30.0),
            start_wave_period: finite_or(self.start_wave_period, defaults.start_wave_period)
                .clamp(1.0, 200.0),
            ..self.clone()
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "ocean_commotion_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Some(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    None => log::warn!("Stored settings unreadable, using defaults"),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }

    /// Parse stored JSON; missing fields take defaults, values are sanitized
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str::<Self>(json).ok().map(|s| s.sanitized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let s = Settings::default();
        assert_eq!(s.debris_count, DEBRIS_COUNT);
        assert_eq!(s.grace_period, GRACE_PERIOD);
        assert!(!s.fish_view);
        assert_eq!(s.sanitized(), s);
    }

    #[test]
    fn test_sanitize_clamps() {
        let s = Settings {
            debris_count: 0,
            grace_period: f32::NAN,
            start_wave_period: -5.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(s.debris_count, 1);
        assert_eq!(s.grace_period, GRACE_PERIOD);
        assert_eq!(s.start_wave_period, 1.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{"fish_view": true, "debris_count": 50000}"#).unwrap();
        assert!(s.fish_view);
        assert_eq!(s.debris_count, 2000);
        assert_eq!(s.grace_period, GRACE_PERIOD);
    }

    #[test]
    fn test_garbage_json_rejected() {
        assert!(Settings::from_json("not json").is_none());
    }
}
