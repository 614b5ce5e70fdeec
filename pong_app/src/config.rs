//! Loop settings read from the environment (and `.env`, if present)

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use game_core::Params;

/// Who drives the left paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Autopilot,
    /// Key names read line by line from stdin
    Keyboard,
}

/// Settings for the driving loop. Gameplay tuning lives in [`game_core::Config`].
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Ticks per second; 0 runs unpaced
    pub tps: f64,
    /// Stop after this many ticks; 0 means no limit
    pub max_ticks: u64,
    pub seed: u64,
    /// Frames between snapshot lines
    pub render_every: u64,
    /// Matches the autopilot plays before quitting
    pub matches: u32,
    /// Capacity of the audio cue queue
    pub audio_queue: usize,
    pub input: InputMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tps: Params::TICKS_PER_SECOND as f64,
            max_ticks: 10 * 60 * Params::TICKS_PER_SECOND as u64,
            seed: 12345,
            render_every: Params::TICKS_PER_SECOND as u64,
            matches: 1,
            audio_queue: 32,
            input: InputMode::Autopilot,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: &'static str,
}

impl fmt::Display for AppConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:?}: {}", self.key, self.value, self.reason)
    }
}

impl std::error::Error for AppConfigError {}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset keys keep their defaults; an unset
    /// `PONG_SEED` draws a fresh random seed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let tps: f64 = parse(&lookup, "PONG_TPS", defaults.tps)?;
        if !tps.is_finite() || tps < 0.0 {
            return Err(AppConfigError {
                key: "PONG_TPS",
                value: tps.to_string(),
                reason: "must be zero or a positive number",
            });
        }
        if tps > 0.0 && Duration::try_from_secs_f64(1.0 / tps).is_err() {
            return Err(AppConfigError {
                key: "PONG_TPS",
                value: tps.to_string(),
                reason: "too slow to pace",
            });
        }

        let render_every: u64 = parse(&lookup, "PONG_RENDER_EVERY", defaults.render_every)?;
        if render_every == 0 {
            return Err(AppConfigError {
                key: "PONG_RENDER_EVERY",
                value: "0".to_string(),
                reason: "must be at least 1",
            });
        }

        let matches: u32 = parse(&lookup, "PONG_MATCHES", defaults.matches)?;
        if matches == 0 {
            return Err(AppConfigError {
                key: "PONG_MATCHES",
                value: "0".to_string(),
                reason: "must be at least 1",
            });
        }

        let audio_queue: usize = parse(&lookup, "PONG_AUDIO_QUEUE", defaults.audio_queue)?;
        if audio_queue == 0 {
            return Err(AppConfigError {
                key: "PONG_AUDIO_QUEUE",
                value: "0".to_string(),
                reason: "must be at least 1",
            });
        }

        let input = match lookup("PONG_INPUT").as_deref().map(str::trim) {
            None | Some("autopilot") => InputMode::Autopilot,
            Some("keyboard") => InputMode::Keyboard,
            Some(other) => {
                return Err(AppConfigError {
                    key: "PONG_INPUT",
                    value: other.to_string(),
                    reason: "expected \"autopilot\" or \"keyboard\"",
                })
            }
        };

        Ok(Self {
            tps,
            max_ticks: parse(&lookup, "PONG_MAX_TICKS", defaults.max_ticks)?,
            seed: parse(&lookup, "PONG_SEED", rand::random())?,
            render_every,
            matches,
            audio_queue,
            input,
        })
    }

    /// Time budget for one tick, or `None` when unpaced
    pub fn frame_duration(&self) -> Option<Duration> {
        if self.tps > 0.0 {
            Duration::try_from_secs_f64(1.0 / self.tps).ok()
        } else {
            None
        }
    }
}

fn parse<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, AppConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| AppConfigError {
            key,
            value: raw,
            reason: "not a valid number",
        }),
    }
}
