use std::fmt;

/// Reasons a [`crate::Config`] cannot be used to build an engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Court width or height is zero or negative
    InvalidCourt { width: i32, height: i32 },
    /// A paddle or ball dimension is zero or negative
    InvalidSize { what: &'static str, width: i32, height: i32 },
    /// A per-tick speed is zero or negative
    InvalidSpeed { what: &'static str, value: i32 },
    /// Winning score of zero would end the match before it starts
    InvalidWinScore,
    /// Paddles or ball do not fit inside the court
    DoesNotFit { what: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCourt { width, height } => {
                write!(f, "court must be positive, got {width}x{height}")
            }
            ConfigError::InvalidSize {
                what,
                width,
                height,
            } => write!(f, "{what} size must be positive, got {width}x{height}"),
            ConfigError::InvalidSpeed { what, value } => {
                write!(f, "{what} must be positive, got {value}")
            }
            ConfigError::InvalidWinScore => write!(f, "winning score must be at least 1"),
            ConfigError::DoesNotFit { what } => write!(f, "{what} does not fit inside the court"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_offending_values() {
        let err = ConfigError::InvalidCourt {
            width: 0,
            height: 600,
        };
        assert_eq!(err.to_string(), "court must be positive, got 0x600");

        let err = ConfigError::InvalidSpeed {
            what: "ai_speed",
            value: -1,
        };
        assert_eq!(err.to_string(), "ai_speed must be positive, got -1");
    }
}
