//! Input sources feeding commands to the loop once per tick

use std::collections::VecDeque;
use std::io::BufRead;

use game_core::{Command, RenderSnapshot};
use log::{debug, warn};

/// Produces the commands for the coming tick, given the last rendered frame
pub trait InputSource {
    fn poll(&mut self, view: &RenderSnapshot) -> Vec<Command>;
}

/// Map a key name to its command
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Command::MoveUp),
        "ArrowDown" | "s" | "S" => Some(Command::MoveDown),
        " " | "space" | "Space" => Some(Command::Restart),
        "Escape" | "Esc" | "escape" => Some(Command::Quit),
        _ => None,
    }
}

/// Reads one line per tick and maps each whitespace-separated key name on it.
///
/// An empty line is an idle tick. End of input or a read error quits.
pub struct KeyboardInput<R: BufRead> {
    reader: R,
    line: String,
}

impl<R: BufRead> KeyboardInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }
}

impl<R: BufRead> InputSource for KeyboardInput<R> {
    fn poll(&mut self, _view: &RenderSnapshot) -> Vec<Command> {
        self.line.clear();
        match self.reader.read_line(&mut self.line) {
            Ok(0) => vec![Command::Quit],
            Ok(_) => self
                .line
                .split_whitespace()
                .filter_map(|key| {
                    let command = command_for_key(key);
                    if command.is_none() {
                        debug!("Ignoring key {key:?}");
                    }
                    command
                })
                .collect(),
            Err(e) => {
                warn!("Input closed: {e}");
                vec![Command::Quit]
            }
        }
    }
}

/// Headless stand-in for a human on the left paddle.
///
/// Only reacts while the ball is coming at it in its own half, and only on
/// even ticks, so it loses rallies now and then. After a game over it asks
/// for a restart until its match count is used up, then quits.
#[derive(Debug)]
pub struct Autopilot {
    matches_left: u32,
    last_ball_x: Option<i32>,
}

impl Autopilot {
    /// Half-height of the band where the paddle holds still
    const DEADZONE: i32 = 8;

    pub fn new(matches: u32) -> Self {
        Self {
            matches_left: matches,
            last_ball_x: None,
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, view: &RenderSnapshot) -> Vec<Command> {
        if view.game_over {
            self.last_ball_x = None;
            self.matches_left = self.matches_left.saturating_sub(1);
            return if self.matches_left == 0 {
                vec![Command::Quit]
            } else {
                vec![Command::Restart]
            };
        }

        let ball = view.ball.center();
        let approaching = self.last_ball_x.is_some_and(|x| view.ball.x < x);
        self.last_ball_x = Some(view.ball.x);

        if !approaching || ball.x > view.midline_x || view.tick % 2 == 1 {
            return Vec::new();
        }

        let diff = ball.y - view.player.center().y;
        if diff > Self::DEADZONE {
            vec![Command::MoveDown]
        } else if diff < -Self::DEADZONE {
            vec![Command::MoveUp]
        } else {
            Vec::new()
        }
    }
}

/// Replays a fixed list of per-tick commands, then quits
#[derive(Debug, Default)]
pub struct ScriptedInput {
    script: VecDeque<Vec<Command>>,
}

impl ScriptedInput {
    pub fn new(script: Vec<Vec<Command>>) -> Self {
        Self {
            script: script.into(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _view: &RenderSnapshot) -> Vec<Command> {
        self.script.pop_front().unwrap_or_else(|| vec![Command::Quit])
    }
}
