//! Player preferences, persisted as JSON in ~/.escape-earth/settings.json.
//!
//! None of these touch gameplay tuning; they control pacing of the render
//! loop, cosmetic layers and RNG seeding.

use crate::core::constants::{DEFAULT_FRAME_RATE, MAX_FRAME_RATE, MIN_FRAME_RATE};
use crate::utils::persistence::{data_path, load_json_or_default, save_json};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use std::time::Duration;

pub const SETTINGS_FILENAME: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Target frames per second for input polling and drawing.
    pub frame_rate: u32,
    /// Draw the starfield and skyline layers.
    pub backdrop: bool,
    /// Fixed RNG seed. `None` seeds from entropy on each launch.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            backdrop: true,
            seed: None,
        }
    }
}

impl Settings {
    /// Load settings from the default location, writing defaults on first
    /// launch so there is a file to edit.
    pub fn load() -> io::Result<Self> {
        let path = data_path(SETTINGS_FILENAME)?;
        if !path.exists() {
            let settings = Self::default();
            settings.save_to(&path)?;
            return Ok(settings);
        }
        Ok(Self::load_from(&path))
    }

    /// Like [`Settings::load`], but an unusable data directory only logs a
    /// warning and yields the defaults.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log::warn!("Settings unavailable, using defaults: {}", e);
            Self::default()
        })
    }

    /// Load from `path`, falling back to defaults for anything unreadable.
    pub fn load_from(path: &Path) -> Self {
        let mut settings: Self = load_json_or_default(path);
        settings.frame_rate = settings.frame_rate.clamp(MIN_FRAME_RATE, MAX_FRAME_RATE);
        settings
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        save_json(path, self)
    }

    /// Wall-clock budget of one frame.
    pub fn frame_duration(&self) -> Duration {
        let fps = self.frame_rate.clamp(MIN_FRAME_RATE, MAX_FRAME_RATE);
        Duration::from_micros(1_000_000 / fps as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "escape-earth-settings-{}-{}.json",
            std::process::id(),
            name
        ))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.frame_rate, 60);
        assert!(settings.backdrop);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = temp_path("partial");
        fs::write(&path, r#"{ "seed": 99 }"#).unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.seed, Some(99));
        assert_eq!(settings.frame_rate, 60);
        assert!(settings.backdrop);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_frame_rate_clamped() {
        let path = temp_path("clamp");
        fs::write(&path, r#"{ "frame_rate": 5000 }"#).unwrap();
        assert_eq!(Settings::load_from(&path).frame_rate, MAX_FRAME_RATE);
        fs::write(&path, r#"{ "frame_rate": 0 }"#).unwrap();
        assert_eq!(Settings::load_from(&path).frame_rate, MIN_FRAME_RATE);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_roundtrip() {
        let path = temp_path("roundtrip");
        let settings = Settings {
            frame_rate: 30,
            backdrop: false,
            seed: Some(7),
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_frame_duration() {
        let settings = Settings::default();
        assert_eq!(settings.frame_duration(), Duration::from_micros(16_666));
    }
}
