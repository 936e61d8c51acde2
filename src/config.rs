//! Game configuration
//!
//! Every numeric field must be positive; `validate` runs before the first
//! tick and a bad config is fatal, never recovered mid-run.

use serde::{Deserialize, Serialize};

use crate::consts;

/// A configuration rejected at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A dimension or speed field was zero, negative, or NaN
    NonPositive(&'static str),
    /// The winning score must be at least 1
    ZeroWinningScore,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonPositive(field) => {
                write!(f, "config field `{field}` must be positive")
            }
            ConfigError::ZeroWinningScore => write!(f, "winning_score must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Tunable match parameters, immutable once the game is constructed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Paddle travel per tick
    pub paddle_speed: f32,
    pub ball_radius: f32,
    /// Per-axis ball speed per tick
    pub ball_speed: f32,
    /// Tolerance band that keeps the AI paddle from jittering
    pub ai_dead_zone: f32,
    pub winning_score: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: consts::FIELD_WIDTH,
            field_height: consts::FIELD_HEIGHT,
            paddle_width: consts::PADDLE_WIDTH,
            paddle_height: consts::PADDLE_HEIGHT,
            paddle_speed: consts::PADDLE_SPEED,
            ball_radius: consts::BALL_RADIUS,
            ball_speed: consts::BALL_SPEED,
            ai_dead_zone: consts::AI_DEAD_ZONE,
            winning_score: consts::WINNING_SCORE,
        }
    }
}

impl GameConfig {
    /// Reject non-positive dimensions/speeds and a zero winning score
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("ai_dead_zone", self.ai_dead_zone),
        ];
        for (name, value) in fields {
            // `!(> 0.0)` also rejects NaN
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive(name));
            }
        }
        if self.winning_score == 0 {
            return Err(ConfigError::ZeroWinningScore);
        }
        Ok(())
    }

    /// Ball bounding-box side length
    pub fn ball_size(&self) -> f32 {
        self.ball_radius * 2.0
    }

    /// Largest legal paddle y (top-left)
    pub fn max_paddle_y(&self) -> f32 {
        self.field_height - self.paddle_height
    }

    /// Clamp a paddle y into the field
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_dimension() {
        let config = GameConfig {
            field_height: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive("field_height"))
        );

        let config = GameConfig {
            ball_speed: -5.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonPositive("ball_speed")));
    }

    #[test]
    fn test_rejects_nan() {
        let config = GameConfig {
            paddle_speed: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_winning_score() {
        let config = GameConfig {
            winning_score: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWinningScore));
    }

    #[test]
    fn test_clamp_paddle_y() {
        let config = GameConfig::default();
        assert_eq!(config.clamp_paddle_y(-50.0), 0.0);
        assert_eq!(config.clamp_paddle_y(10_000.0), config.max_paddle_y());
        assert_eq!(config.clamp_paddle_y(250.0), 250.0);
    }

    #[test]
    fn test_json_overrides_keep_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"winning_score": 11, "ball_speed": 7.0}"#).unwrap();
        assert_eq!(config.winning_score, 11);
        assert_eq!(config.ball_speed, 7.0);
        assert_eq!(config.field_width, crate::consts::FIELD_WIDTH);
    }
}
