use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::WallMode;

pub const MIN_GRID_SIZE: usize = 5;
pub const MAX_GRID_SIZE: usize = 100;
pub const MIN_CELL_SIZE: u32 = 8;
pub const MAX_CELL_SIZE: u32 = 64;
/// Moves per second. Eating food never pushes the speed past this.
pub const MAX_SPEED: f32 = 15.0;

/// Per-session configuration. `grid_size` and `cell_size` only change through a reset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub grid_size: usize,
    pub cell_size: u32,
    pub initial_speed: f32,
    pub wall_mode: WallMode,
    pub sound_enabled: bool,
}

impl GameSettings {
    pub fn canvas_width(&self) -> u32 {
        self.grid_size as u32 * self.cell_size
    }

    pub fn canvas_height(&self) -> u32 {
        self.grid_size as u32 * self.cell_size
    }

    pub fn apply(&mut self, update: &SettingsUpdate) {
        if let Some(wall_mode) = update.wall_mode {
            self.wall_mode = wall_mode;
        }
        if let Some(speed) = update.initial_speed {
            self.initial_speed = speed;
        }
        if let Some(sound_enabled) = update.sound_enabled {
            self.sound_enabled = sound_enabled;
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid_size: 20,
            cell_size: 20,
            initial_speed: 8.0,
            wall_mode: WallMode::Solid,
            sound_enabled: true,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(format!(
                "grid_size must be between {} and {}",
                MIN_GRID_SIZE, MAX_GRID_SIZE
            ));
        }
        if !(MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&self.cell_size) {
            return Err(format!(
                "cell_size must be between {} and {}",
                MIN_CELL_SIZE, MAX_CELL_SIZE
            ));
        }
        validate_speed(self.initial_speed)
    }
}

fn validate_speed(speed: f32) -> Result<(), String> {
    if !speed.is_finite() || speed <= 0.0 || speed > MAX_SPEED {
        return Err(format!(
            "initial_speed must be greater than 0 and at most {}",
            MAX_SPEED
        ));
    }
    Ok(())
}

/// Settings that may change while a game is running. Grid geometry is deliberately absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsUpdate {
    pub wall_mode: Option<WallMode>,
    pub initial_speed: Option<f32>,
    pub sound_enabled: Option<bool>,
}

impl Validate for SettingsUpdate {
    fn validate(&self) -> Result<(), String> {
        match self.initial_speed {
            Some(speed) => validate_speed(speed),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = GameSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.canvas_width(), 400);
        assert_eq!(settings.canvas_height(), 400);
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let too_small = GameSettings { grid_size: 3, ..GameSettings::default() };
        assert!(too_small.validate().is_err());

        let tiny_cells = GameSettings { cell_size: 2, ..GameSettings::default() };
        assert!(tiny_cells.validate().is_err());

        let zero_speed = GameSettings { initial_speed: 0.0, ..GameSettings::default() };
        assert!(zero_speed.validate().is_err());

        let too_fast = GameSettings { initial_speed: 15.5, ..GameSettings::default() };
        assert!(too_fast.validate().is_err());

        let nan_speed = GameSettings { initial_speed: f32::NAN, ..GameSettings::default() };
        assert!(nan_speed.validate().is_err());
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut settings = GameSettings::default();
        settings.apply(&SettingsUpdate {
            wall_mode: Some(WallMode::Wrap),
            ..SettingsUpdate::default()
        });
        assert_eq!(settings.wall_mode, WallMode::Wrap);
        assert_eq!(settings.initial_speed, 8.0);
        assert!(settings.sound_enabled);
        assert_eq!(settings.grid_size, 20);
    }

    #[test]
    fn test_update_speed_is_validated() {
        let update = SettingsUpdate {
            initial_speed: Some(-1.0),
            ..SettingsUpdate::default()
        };
        assert!(update.validate().is_err());
        assert!(SettingsUpdate::default().validate().is_ok());
    }
}
