use serde::Serialize;

use crate::map::{Court, Rect};
use crate::resources::Score;

pub const RESTART_INSTRUCTIONS: &str = "Press SPACE to Play Again or ESC to Exit";

/// Read-only view of everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderSnapshot {
    pub tick: u64,
    pub court: Court,
    pub midline_x: i32,
    pub player: Rect,
    pub ai: Rect,
    pub ball: Rect,
    pub score: Score,
    pub game_over: bool,
    /// "Player Wins!" / "AI Wins!" once the match is decided
    pub winner: Option<&'static str>,
    /// Shown on the game-over screen
    pub instructions: Option<&'static str>,
}
