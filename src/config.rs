//! Game configuration
//!
//! Playfield size, tick rate and the other tunables live here instead of in
//! module-level constants so the session can be built for any field size
//! (tests use this heavily). Values come from three layers, lowest first:
//! built-in defaults, an optional JSON file, then command line overrides.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Distance kept between a freshly spawned ball and the playfield edge
pub const SPAWN_MARGIN: f64 = 50.0;

/// Size of the rectangular playfield in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
}

impl Playfield {
    pub fn new(width: f64, height: f64) -> Self {
        Playfield { width, height }
    }

    pub fn center(&self) -> glam::DVec2 {
        glam::DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// How long demo mode runs before falling back to the menu
    pub demo_duration_secs: u32,
    pub screenshot_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 800,
            height: 600,
            tick_rate: 60,
            demo_duration_secs: 30,
            screenshot_dir: PathBuf::from("screenshots"),
        }
    }
}

impl GameConfig {
    /// Loads a config from a JSON file. Missing fields keep their defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path.as_ref())?;
        let config: GameConfig = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Config file looked up when no `--config` is given
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("jazzball").join("config.json"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let min_side = (SPAWN_MARGIN * 2.0) as u32;
        if self.width <= min_side || self.height <= min_side {
            return Err(ConfigError::Invalid(format!(
                "playfield {}x{} is too small, both sides must exceed {}",
                self.width, self.height, min_side
            )));
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::Invalid("tick_rate must be positive".to_string()));
        }
        if self.demo_duration_secs.checked_mul(self.tick_rate).is_none() {
            return Err(ConfigError::Invalid(format!(
                "demo of {}s at {} ticks/s does not fit in a tick counter",
                self.demo_duration_secs, self.tick_rate
            )));
        }
        Ok(())
    }

    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.width as f64, self.height as f64)
    }

    /// Number of demo ticks allowed before returning to the menu.
    /// Saturates for configs that skipped `validate()`.
    pub fn demo_duration_ticks(&self) -> u32 {
        self.demo_duration_secs.saturating_mul(self.tick_rate)
    }
}

/// Errors that can occur while loading the configuration
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("jazzball_config_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();

        assert_eq!(config.playfield(), Playfield::new(800.0, 600.0));
        assert_eq!(config.demo_duration_ticks(), 30 * 60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let path = temp_file("partial.json", r#"{ "tick_rate": 30 }"#);
        let config = GameConfig::load_from_file(&path).unwrap();

        assert_eq!(config.tick_rate, 30);
        assert_eq!(config.width, 800);
        assert_eq!(config.demo_duration_ticks(), 30 * 30);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        // There is no seed setting; old files that carry one still load
        let path = temp_file("legacy.json", r#"{ "seed": 7, "width": 640 }"#);
        let config = GameConfig::load_from_file(&path).unwrap();

        assert_eq!(config.width, 640);
        assert_eq!(config, GameConfig { width: 640, ..Default::default() });
    }

    #[test]
    fn test_load_rejects_tiny_playfield() {
        let path = temp_file("tiny.json", r#"{ "width": 80 }"#);
        let result = GameConfig::load_from_file(&path);

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_rejects_overflowing_demo_duration() {
        let path = temp_file("long_demo.json", r#"{ "demo_duration_secs": 100000000 }"#);
        let result = GameConfig::load_from_file(&path);

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_demo_duration_ticks_saturates() {
        let config = GameConfig {
            demo_duration_secs: u32::MAX,
            ..Default::default()
        };
        assert_eq!(config.demo_duration_ticks(), u32::MAX);
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let path = temp_file("bad.json", "{ width: ");
        let result = GameConfig::load_from_file(&path);

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = GameConfig::load_from_file("/definitely/not/here/config.json");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_zero_tick_rate_is_invalid() {
        let config = GameConfig {
            tick_rate: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
