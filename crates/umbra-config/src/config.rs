//! Configuration sections and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};
use umbra_lighting::LightingParams;
use umbra_walls::WallParams;

use crate::error::ConfigError;

const FILE_NAME: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Lighting tunables.
    pub lighting: LightingParams,
    /// Background wall tunables.
    pub walls: WallParams,
    /// Generated world settings for the demo.
    pub world: WorldConfig,
    pub debug: DebugConfig,
}

/// Size and terrain of the generated demo world.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Width in tiles.
    pub width: usize,
    /// Height in tiles.
    pub height: usize,
    pub seed: u32,
    /// Mean surface row as a fraction of the height.
    pub surface_level: f32,
    /// Surface roughness in tiles.
    pub surface_amplitude: f64,
    pub surface_frequency: f64,
    /// Noise threshold above which underground tiles are carved into caves.
    pub cave_threshold: f64,
    /// Intensity of the torch the demo places.
    pub torch_intensity: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 96,
            height: 64,
            seed: 42,
            surface_level: 0.3,
            surface_amplitude: 6.0,
            surface_frequency: 0.04,
            cave_threshold: 0.45,
            torch_intensity: 0.8,
        }
    }
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Print the ASCII shade map after lighting.
    pub print_light_map: bool,
    /// Write JSON logs next to the config in debug builds.
    pub file_logging: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            print_light_map: true,
            file_logging: true,
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(FILE_NAME);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(config_dir.join(FILE_NAME), serialized).map_err(ConfigError::WriteError)
    }

    /// Re-reads the file. Returns `Some` only when it differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(FILE_NAME))?;
        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use umbra_lighting::RecomputePolicy;

    #[test]
    fn test_default_config_serializes() {
        let ron_str =
            ron::ser::to_string_pretty(&Config::default(), ron::ser::PrettyConfig::new()).unwrap();
        assert!(ron_str.contains("layer_cap: 6"));
        assert!(ron_str.contains("recompute: OnDemand"));
        assert!(ron_str.contains("wall_size: 16"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.lighting.recompute = RecomputePolicy::Once;
        config.walls.fade.enabled = true;
        let ron_str = ron::to_string(&config).unwrap();
        let back: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: Config = ron::from_str("(world: (width: 10))").unwrap();
        assert_eq!(config.world.width, 10);
        assert_eq!(config.world.height, 64);
        assert_eq!(config.lighting, LightingParams::default());
        assert_eq!(config.walls, WallParams::default());
    }

    #[test]
    fn test_nested_lighting_override() {
        let config: Config =
            ron::from_str("(lighting: (ambient_light: 0.05, decay: (liquid: 0.5)))").unwrap();
        assert_eq!(config.lighting.ambient_light, 0.05);
        assert_eq!(config.lighting.decay.liquid, 0.5);
        assert_eq!(config.lighting.decay.air, 0.9);
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.world.seed = 7;
        config.lighting.layer_cap = 8;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("umbra");
        let config = Config::load_or_create(&nested).unwrap();
        assert_eq!(config, Config::default());
        assert!(nested.join("config.ron").exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.lighting.enabled = false;
        modified.save(dir.path()).unwrap();

        let reloaded = config.reload(dir.path()).unwrap().unwrap();
        assert!(!reloaded.lighting.enabled);
        assert!(modified.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.ron"), "{{not valid}}").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)), "{err}");
    }

    #[test]
    fn test_reload_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::default().reload(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }
}
