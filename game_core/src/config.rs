use glam::IVec2;

use crate::error::ConfigError;
use crate::params::Params;
use crate::Side;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub court_width: i32,
    pub court_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_speed: i32,
    pub paddle_margin: i32,
    pub ai_speed: i32,
    pub ball_size: i32,
    pub ball_speed_x: i32,
    pub ball_speed_y: i32,
    pub win_score: u8,
    /// Push the ball back inside the court when it bounces off a wall
    pub clamp_wall_bounce: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ai_speed: Params::AI_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed_x: Params::BALL_SPEED_X,
            ball_speed_y: Params::BALL_SPEED_Y,
            win_score: Params::WIN_SCORE,
            clamp_wall_bounce: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject configurations the simulation cannot run with.
    ///
    /// Called once by [`crate::GameEngine::new`]; nothing is re-checked mid-game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.court_width <= 0 || self.court_height <= 0 {
            return Err(ConfigError::InvalidCourt {
                width: self.court_width,
                height: self.court_height,
            });
        }
        if self.paddle_width <= 0 || self.paddle_height <= 0 {
            return Err(ConfigError::InvalidSize {
                what: "paddle",
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if self.ball_size <= 0 {
            return Err(ConfigError::InvalidSize {
                what: "ball",
                width: self.ball_size,
                height: self.ball_size,
            });
        }
        for (what, value) in [
            ("paddle_speed", self.paddle_speed),
            ("ai_speed", self.ai_speed),
            ("ball_speed_x", self.ball_speed_x),
            ("ball_speed_y", self.ball_speed_y),
        ] {
            if value <= 0 {
                return Err(ConfigError::InvalidSpeed { what, value });
            }
        }
        if self.win_score == 0 {
            return Err(ConfigError::InvalidWinScore);
        }
        // Both paddles inside the court with a gap between them (i64: no overflow)
        let margin = i64::from(self.paddle_margin);
        let width = i64::from(self.paddle_width);
        if self.paddle_height > self.court_height
            || margin < 0
            || i64::from(self.court_width) <= 2 * (margin + width)
        {
            return Err(ConfigError::DoesNotFit { what: "paddles" });
        }
        if self.ball_size >= self.court_height || self.ball_size >= self.court_width {
            return Err(ConfigError::DoesNotFit { what: "ball" });
        }
        Ok(())
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> i32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Ai => self.court_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Top edge that vertically centres a paddle
    pub fn paddle_spawn_y(&self) -> i32 {
        self.court_height / 2 - self.paddle_height / 2
    }

    /// Top-left corner that puts the ball's centre on the court centre
    pub fn ball_spawn(&self) -> IVec2 {
        IVec2::new(
            self.court_width / 2 - self.ball_size / 2,
            self.court_height / 2 - self.ball_size / 2,
        )
    }

    pub fn ball_speed(&self) -> IVec2 {
        IVec2::new(self.ball_speed_x, self.ball_speed_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Player), 10, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Ai), 780, "Right paddle X position");
    }

    #[test]
    fn test_ball_spawn_is_centred() {
        let config = Config::new();
        let spawn = config.ball_spawn();
        assert_eq!(spawn, IVec2::new(397, 297));
        assert_eq!(spawn.x + config.ball_size / 2, config.court_width / 2);
        assert_eq!(spawn.y + config.ball_size / 2, config.court_height / 2);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_non_positive_court() {
        let config = Config {
            court_width: 0,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidCourt {
                width: 0,
                height: 600
            })
        );

        let config = Config {
            court_height: -5,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCourt { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_speeds_and_win_score() {
        let config = Config {
            ai_speed: 0,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidSpeed {
                what: "ai_speed",
                value: 0
            })
        );

        let config = Config {
            win_score: 0,
            ..Config::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidWinScore));
    }

    #[test]
    fn test_rejects_paddles_that_do_not_fit() {
        let config = Config {
            paddle_height: 601,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DoesNotFit { what: "paddles" })
        );

        let config = Config {
            court_width: 40,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DoesNotFit { what: "paddles" })
        );
    }

    #[test]
    fn test_rejects_paddles_off_the_court() {
        let config = Config {
            paddle_margin: -50,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DoesNotFit { what: "paddles" })
        );

        let config = Config {
            paddle_margin: i32::MAX,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DoesNotFit { what: "paddles" })
        );

        let config = Config {
            paddle_margin: 0,
            ..Config::new()
        };
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.paddle_x(Side::Ai) + config.paddle_width, 800);
    }
}
