use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use snake_common::config::Validate;
use snake_common::games::snake::GameSettings;

use super::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "snake_config.yaml";

pub const MIN_FRAME_RATE_HZ: u32 = 10;
pub const MAX_FRAME_RATE_HZ: u32 = 240;

pub type DesktopConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Config next to the executable unless an explicit path is given.
pub fn get_config_manager(path: Option<&Path>) -> DesktopConfigManager {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(default_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameSettings,
    #[serde(default)]
    pub high_score: u32,
    pub frame_rate_hz: u32,
}

impl Config {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate_hz as f64)
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        if !(MIN_FRAME_RATE_HZ..=MAX_FRAME_RATE_HZ).contains(&self.frame_rate_hz) {
            return Err(format!(
                "Frame rate must be between {} and {}, got {}",
                MIN_FRAME_RATE_HZ, MAX_FRAME_RATE_HZ, self.frame_rate_hz
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameSettings::default(),
            high_score: 0,
            frame_rate_hz: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_common::config::{ConfigContentProvider, ConfigSerializer};
    use snake_common::games::snake::{SettingsUpdate, WallMode};

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_config_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
        assert_eq!(Config::default().frame_interval(), Duration::from_secs_f64(1.0 / 60.0));
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_file() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(&file_path);

        let serialized = serializer.serialize(&default_config).unwrap();
        assert!(content_provider.set_config_content(&serialized).is_ok());

        let read_string = content_provider.get_config_content().unwrap().unwrap();
        let deserialized: Config = serializer.deserialize(&read_string).unwrap();
        assert_eq!(default_config, deserialized);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_manager_persists_high_score_and_options() {
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.as_path()));

        let update = SettingsUpdate {
            wall_mode: Some(WallMode::Wrap),
            initial_speed: Some(12.0),
            sound_enabled: Some(false),
        };
        manager
            .update_config(|config| {
                config.high_score = 120;
                config.game.apply(&update);
            })
            .unwrap();

        let reloaded = get_config_manager(Some(file_path.as_path())).get_config().unwrap();
        assert_eq!(reloaded.high_score, 120);
        assert_eq!(reloaded.game.wall_mode, WallMode::Wrap);
        assert_eq!(reloaded.game.initial_speed, 12.0);
        assert!(!reloaded.game.sound_enabled);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_high_score_defaults_to_zero() {
        let yaml = "game:\n  grid_size: 20\n  cell_size: 20\n  initial_speed: 8.0\n  wall_mode: Solid\n  sound_enabled: true\nframe_rate_hz: 60\n";
        let config: Config = YamlConfigSerializer::new().deserialize(yaml).unwrap();
        assert_eq!(config.high_score, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let too_fast = Config {
            frame_rate_hz: 1000,
            ..Config::default()
        };
        assert!(too_fast.validate().is_err());

        let mut bad_grid = Config::default();
        bad_grid.game.grid_size = 2;
        assert!(bad_grid.validate().is_err());
    }
}
