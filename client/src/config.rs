use std::time::Duration;

use engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use engine::game::{FieldSize, GameSettings};
use serde::{Deserialize, Serialize};

use crate::colors;

const CONFIG_FILE_NAME: &str = "snake_client_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub type ClientConfigManager =
    ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub fn get_config_manager() -> ClientConfigManager {
    ConfigManager::from_yaml_file(&get_config_path())
}

pub fn manager_for_path(path: &str) -> ClientConfigManager {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub snake_color: String,
    pub food_color: String,
    pub cell_size: u32,
    pub initial_length: u32,
    pub max_length: u32,
    pub tick_interval_ms: u32,
}

impl Config {
    pub fn game_settings(&self, field_size: FieldSize) -> GameSettings {
        GameSettings {
            field_size,
            initial_length: self.initial_length as usize,
            max_length: self.max_length as usize,
            tick_interval: Duration::from_millis(self.tick_interval_ms as u64),
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if colors::color_by_name(&self.snake_color).is_none() {
            return Err(format!("unknown snake color: {}", self.snake_color));
        }
        if colors::color_by_name(&self.food_color).is_none() {
            return Err(format!("unknown food color: {}", self.food_color));
        }
        if self.cell_size < 8 || self.cell_size > 64 {
            return Err("cell_size must be between 8 and 64 pixels".to_string());
        }
        if self.initial_length == 0 {
            return Err("initial_length must be at least 1".to_string());
        }
        if self.initial_length > self.max_length {
            return Err("initial_length must not exceed max_length".to_string());
        }
        if self.tick_interval_ms < 50 || self.tick_interval_ms > 1000 {
            return Err("tick_interval_ms must be between 50 and 1000".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snake_color: "Green".to_string(),
            food_color: "Red".to_string(),
            cell_size: 20,
            initial_length: 5,
            max_length: 100,
            tick_interval_ms: 100,
        }
    }
}
