//! Game configuration
//!
//! Tunables live in a RON file next to the executable's working directory.
//! Every field has a default, so a partial file only overrides what it names:
//!
//! ```ron
//! (
//!     player_speed: 4.0,
//!     seed: Some(42),
//!     stones: (min_count: 20, max_count: 30, min_size: 25, max_size: 60),
//! )
//! ```

use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::game::FpsLimit;
use crate::world::{SpawnRange, MAX_WORLD_HALF_EXTENT};

/// Default config file name, resolved against the working directory
pub const CONFIG_PATH: &str = "outpost.ron";

/// Error type for config loading and saving
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::SerializeError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// All game tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window / viewport width in pixels
    pub screen_width: f32,
    /// Window / viewport height in pixels
    pub screen_height: f32,

    /// Player circle radius (world units)
    pub player_radius: f32,
    /// Player speed (world units per frame). At most `2 * player_radius`:
    /// anything faster can step clean over a thin obstacle in one frame.
    pub player_speed: f32,

    /// House wall thickness
    pub wall_thickness: f32,

    /// World objects are placed inside [-extent, extent] on both axes
    pub world_half_extent: i32,
    pub stones: SpawnRange,
    pub scraps: SpawnRange,
    pub bushes: SpawnRange,

    pub fps_limit: FpsLimit,

    /// Fixed world seed. None = derive from the clock
    pub seed: Option<u64>,

    /// Print a collision trace line for every frame the player moves
    pub debug_log: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 1000.0,
            screen_height: 800.0,
            player_radius: 20.0,
            player_speed: 3.0,
            wall_thickness: 20.0,
            world_half_extent: 1000,
            stones: SpawnRange::new(5, 15, 25, 60),
            scraps: SpawnRange::new(3, 10, 30, 50),
            bushes: SpawnRange::new(5, 12, 40, 70),
            fps_limit: FpsLimit::Fps60,
            seed: None,
            debug_log: false,
        }
    }
}

impl GameConfig {
    /// Outer span of the house: a fifth of the screen width
    pub fn house_span(&self) -> f32 {
        (self.screen_width / 5.0).trunc()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "screen size must be positive ({}x{})",
                self.screen_width, self.screen_height
            )));
        }
        if !(self.player_radius > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "player_radius must be positive ({})",
                self.player_radius
            )));
        }
        if !(self.player_speed > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "player_speed must be positive ({})",
                self.player_speed
            )));
        }
        if self.player_speed > 2.0 * self.player_radius {
            return Err(ConfigError::ValidationError(format!(
                "player_speed {} exceeds the player diameter {}",
                self.player_speed,
                2.0 * self.player_radius
            )));
        }
        if !(self.wall_thickness >= 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "wall_thickness must not be negative ({})",
                self.wall_thickness
            )));
        }
        if self.world_half_extent <= 0 || self.world_half_extent > MAX_WORLD_HALF_EXTENT {
            return Err(ConfigError::ValidationError(format!(
                "world_half_extent must be in 1..={} ({})",
                MAX_WORLD_HALF_EXTENT, self.world_half_extent
            )));
        }

        let world_span = self.world_half_extent * 2;
        for (name, range) in [("stones", &self.stones), ("scraps", &self.scraps), ("bushes", &self.bushes)] {
            if range.min_count > range.max_count {
                return Err(ConfigError::ValidationError(format!(
                    "{}: min_count {} > max_count {}",
                    name, range.min_count, range.max_count
                )));
            }
            if range.min_size < 1 || range.min_size > range.max_size {
                return Err(ConfigError::ValidationError(format!(
                    "{}: size range {}..={} is invalid",
                    name, range.min_size, range.max_size
                )));
            }
            if range.max_size >= world_span {
                return Err(ConfigError::ValidationError(format!(
                    "{}: max_size {} does not fit in the world ({})",
                    name, range.max_size, world_span
                )));
            }
        }
        Ok(())
    }
}

/// Load and validate a config file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GameConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: GameConfig = ron::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

/// Load a config file, falling back to defaults.
///
/// A missing file is normal and silent; anything else that goes wrong is
/// reported and the defaults are used.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> GameConfig {
    let path = path.as_ref();
    if !path.exists() {
        return GameConfig::default();
    }
    match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config {}: {} (using defaults)", path.display(), e);
            GameConfig::default()
        }
    }
}

/// Save a config as pretty RON
pub fn save_config<P: AsRef<Path>>(config: &GameConfig, path: P) -> Result<(), ConfigError> {
    let pretty = ron::ser::PrettyConfig::new()
        .depth_limit(2)
        .indentor("  ".to_string());
    let contents = ron::ser::to_string_pretty(config, pretty)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.house_span(), 200.0);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("outpost.ron");

        let mut config = GameConfig::default();
        config.seed = Some(1234);
        config.player_speed = 5.0;
        config.fps_limit = FpsLimit::Fps30;
        save_config(&config, &path).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("outpost.ron");
        std::fs::write(&path, "(player_speed: 6.0, seed: Some(7))").unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.player_speed, 6.0);
        assert_eq!(loaded.seed, Some(7));
        assert_eq!(loaded.screen_width, 1000.0);
        assert_eq!(loaded.stones, SpawnRange::new(5, 15, 25, 60));
    }

    #[test]
    fn test_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("outpost.ron");
        std::fs::write(&path, "(player_speed: fast)").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::ParseError(_))));
        assert_eq!(load_or_default(&path), GameConfig::default());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.ron");

        assert!(matches!(load_config(&path), Err(ConfigError::IoError(_))));
        assert_eq!(load_or_default(&path), GameConfig::default());
    }

    #[test]
    fn test_validation_rejects_inverted_range() {
        let mut config = GameConfig::default();
        config.bushes = SpawnRange::new(10, 2, 40, 70);
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));

        let mut config = GameConfig::default();
        config.scraps = SpawnRange::new(1, 2, 50, 30);
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validation_rejects_oversized_objects() {
        let mut config = GameConfig::default();
        config.world_half_extent = 20;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_huge_world() {
        let mut config = GameConfig::default();
        config.world_half_extent = i32::MAX;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));

        config.world_half_extent = MAX_WORLD_HALF_EXTENT + 1;
        assert!(config.validate().is_err());

        config.world_half_extent = MAX_WORLD_HALF_EXTENT;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_caps_player_speed() {
        let mut config = GameConfig::default();
        config.player_speed = 2.0 * config.player_radius;
        assert!(config.validate().is_ok());

        config.player_speed = 2.0 * config.player_radius + 1.0;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validation_rejects_bad_player() {
        let mut config = GameConfig::default();
        config.player_speed = 0.0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.player_radius = f32::NAN;
        assert!(config.validate().is_err());
    }
}
