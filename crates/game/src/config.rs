//! Game configuration (window, model paths, flight tuning). Loaded from
//! config.ron at startup.

use serde::{Deserialize, Serialize};

/// Persistent game settings. Loaded from `config.ron` in the current
/// directory; missing fields fall back to reference defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Window width in logical pixels.
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    /// Window height in logical pixels.
    #[serde(default = "default_window_height")]
    pub window_height: u32,
    /// Path to the drone model.
    #[serde(default = "default_drone_model")]
    pub drone_model: String,
    /// Path to the terrain model.
    #[serde(default = "default_terrain_model")]
    pub terrain_model: String,
    /// Vertical placement of the terrain model.
    #[serde(default = "default_terrain_offset_y")]
    pub terrain_offset_y: f32,
    /// Uniform scale applied to the terrain model.
    #[serde(default = "default_terrain_scale")]
    pub terrain_scale: f32,
    /// Translation speed at full control intent, world units per second.
    #[serde(default = "default_speed_multiplier")]
    pub speed_multiplier: f32,
    /// Rotation speed at full roll intent, radians per second.
    #[serde(default = "default_rot_speed_multiplier")]
    pub rot_speed_multiplier: f32,
}

fn default_window_width() -> u32 {
    1280
}
fn default_window_height() -> u32 {
    720
}
fn default_drone_model() -> String {
    "models/drone.glb".to_string()
}
fn default_terrain_model() -> String {
    "models/montain.glb".to_string()
}
fn default_terrain_offset_y() -> f32 {
    -80.0
}
fn default_terrain_scale() -> f32 {
    0.01
}
fn default_speed_multiplier() -> f32 {
    120.0
}
fn default_rot_speed_multiplier() -> f32 {
    170.0
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            drone_model: default_drone_model(),
            terrain_model: default_terrain_model(),
            terrain_offset_y: default_terrain_offset_y(),
            terrain_scale: default_terrain_scale(),
            speed_multiplier: default_speed_multiplier(),
            rot_speed_multiplier: default_rot_speed_multiplier(),
        }
    }
}

impl GameConfig {
    /// Load config from `config.ron`. If the file is missing or invalid,
    /// returns default config.
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    /// Save current config to `config.ron`. Logs on error.
    pub fn save(&self) {
        let path = config_path();
        if let Ok(s) = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            if let Err(e) = std::fs::write(&path, s) {
                log::warn!("Could not write config to {:?}: {}", path, e);
            }
        }
    }
}

fn config_path() -> std::path::PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
        .join("config.ron")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_in_defaults() {
        let config: GameConfig = ron::from_str("(window_width: 1920)").unwrap();
        assert_eq!(config.window_width, 1920);
        assert_eq!(config.window_height, 720);
        assert_eq!(config.terrain_scale, 0.01);
        assert_eq!(config.speed_multiplier, 120.0);
    }
}
