//! Tunable draw rules for a [`Game`](crate::Game).

use crate::error::ConfigError;

/// Draw-rule settings, adjusted by name through [`GameConfig::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Half-moves without a pawn move or capture before the game is drawn.
    pub fifty_move_limit: u16,
    /// Occurrences of one position that draw the game.
    pub repetition_limit: u8,
    /// Whether the game tracks repetitions at all.
    pub detect_repetition: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fifty_move_limit: 100,
            repetition_limit: 3,
            detect_repetition: true,
        }
    }
}

impl GameConfig {
    /// Option names accepted by [`GameConfig::set`].
    pub const OPTIONS: [&'static str; 3] =
        ["fifty_move_limit", "repetition_limit", "detect_repetition"];

    /// Check that every value is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fifty_move_limit == 0 {
            return Err(ConfigError::OutOfRange {
                option: "fifty_move_limit",
                value: 0,
                min: 1,
            });
        }
        if self.repetition_limit < 2 {
            return Err(ConfigError::OutOfRange {
                option: "repetition_limit",
                value: u32::from(self.repetition_limit),
                min: 2,
            });
        }
        Ok(())
    }

    /// Set one option from its textual name and value.
    ///
    /// The config is left unchanged when the name is unknown, the value does
    /// not parse, or the result would fail [`GameConfig::validate`].
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let mut updated = *self;
        match name {
            "fifty_move_limit" => updated.fifty_move_limit = parse_value(name, value)?,
            "repetition_limit" => updated.repetition_limit = parse_value(name, value)?,
            "detect_repetition" => {
                updated.detect_repetition = match value {
                    "on" | "true" => true,
                    "off" | "false" => false,
                    _ => return Err(invalid_value(name, value)),
                };
            }
            _ => {
                return Err(ConfigError::UnknownOption {
                    name: name.to_string(),
                });
            }
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| invalid_value(name, value))
}

fn invalid_value(name: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        option: name.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert_eq!(config.fifty_move_limit, 100);
        assert_eq!(config.repetition_limit, 3);
        assert!(config.detect_repetition);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn set_known_options() {
        let mut config = GameConfig::default();
        config.set("fifty_move_limit", "20").unwrap();
        config.set("repetition_limit", "2").unwrap();
        config.set("detect_repetition", "off").unwrap();
        assert_eq!(config.fifty_move_limit, 20);
        assert_eq!(config.repetition_limit, 2);
        assert!(!config.detect_repetition);
    }

    #[test]
    fn rejected_values_leave_config_unchanged() {
        let mut config = GameConfig::default();
        assert!(matches!(
            config.set("fifty_move_limit", "0"),
            Err(ConfigError::OutOfRange { option: "fifty_move_limit", .. })
        ));
        assert!(matches!(
            config.set("repetition_limit", "1"),
            Err(ConfigError::OutOfRange { min: 2, .. })
        ));
        assert!(matches!(
            config.set("repetition_limit", "many"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("detect_repetition", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("hash", "16"),
            Err(ConfigError::UnknownOption { .. })
        ));
        assert_eq!(config, GameConfig::default());
    }
}
