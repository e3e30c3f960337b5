use std::time::Duration;

use crate::config::Validate;
use super::types::FieldSize;

#[derive(Clone, Debug)]
pub struct GameSettings {
    pub field_size: FieldSize,
    pub initial_length: usize,
    pub max_length: usize,
    pub tick_interval: Duration,
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.field_size.width < 2 || self.field_size.height < 2 {
            return Err("field must be at least 2x2 cells".to_string());
        }
        if self.initial_length == 0 {
            return Err("initial_length must be at least 1".to_string());
        }
        if self.initial_length > self.max_length {
            return Err("initial_length must not exceed max_length".to_string());
        }
        if self.initial_length > self.field_size.width / 2 {
            return Err("initial_length must fit between the field center and the left wall".to_string());
        }
        if self.tick_interval.is_zero() {
            return Err("tick_interval must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_settings() -> GameSettings {
        GameSettings {
            field_size: FieldSize {
                width: 32,
                height: 24,
            },
            initial_length: 5,
            max_length: 100,
            tick_interval: Duration::from_millis(100),
        }
    }

    #[test]
    fn test_valid_settings_pass() {
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn test_initial_length_above_max_is_rejected() {
        let settings = GameSettings {
            initial_length: 101,
            ..valid_settings()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_initial_length_wider_than_half_field_is_rejected() {
        let settings = GameSettings {
            field_size: FieldSize {
                width: 8,
                height: 24,
            },
            ..valid_settings()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_tick_interval_is_rejected() {
        let settings = GameSettings {
            tick_interval: Duration::ZERO,
            ..valid_settings()
        };
        assert!(settings.validate().is_err());
    }
}
