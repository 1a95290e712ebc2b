//! Game settings
//!
//! Read-only at runtime: supplied by the host page (`data-settings` on the
//! canvas) or the `RETRO_PONG_SETTINGS` environment variable on native.
//! Nothing is ever written back.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_ARENA_WIDTH;

/// Environment variable holding settings JSON for native runs
pub const SETTINGS_ENV: &str = "RETRO_PONG_SETTINGS";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence all sound effects
    pub muted: bool,

    // === Layout ===
    /// Widest the arena may grow, in pixels
    pub max_arena_width: f32,

    /// Fixed RNG seed for serves; the host clock is used when unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            max_arena_width: MAX_ARENA_WIDTH,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Parse optional settings JSON, falling back to defaults on any problem
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json {
            Some(json) if !json.trim().is_empty() => match Self::from_json(json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings: {}", e);
                    Self::default()
                }
            },
            _ => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load from the environment (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let json = std::env::var(SETTINGS_ENV).ok();
        Self::from_json_or_default(json.as_deref())
    }

    /// Clamp values into their valid ranges
    fn sanitized(mut self) -> Self {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        if !self.max_arena_width.is_finite() || self.max_arena_width <= 0.0 {
            self.max_arena_width = MAX_ARENA_WIDTH;
        }
        self.max_arena_width = self.max_arena_width.min(MAX_ARENA_WIDTH);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "muted": true, "seed": 42 }"#).unwrap();
        assert!(settings.muted);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.master_volume, 0.8);
        assert_eq!(settings.max_arena_width, 800.0);
    }

    #[test]
    fn test_values_are_clamped() {
        let settings =
            Settings::from_json(r#"{ "master_volume": 3.0, "max_arena_width": 4000 }"#).unwrap();
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.max_arena_width, 800.0);

        let settings = Settings::from_json(r#"{ "max_arena_width": -1 }"#).unwrap();
        assert_eq!(settings.max_arena_width, 800.0);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        assert!(Settings::from_json("{ nope").is_err());
        assert_eq!(Settings::from_json_or_default(Some("{ nope")), Settings::default());
        assert_eq!(Settings::from_json_or_default(Some("  ")), Settings::default());
        assert_eq!(Settings::from_json_or_default(None), Settings::default());
    }
}
