use serde::Serialize;

use crate::components::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub player: u8,
    pub ai: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player = self.player.saturating_add(1),
            Side::Ai => self.ai = self.ai.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.ai >= win_score {
            Some(Side::Ai)
        } else if self.player >= win_score {
            Some(Side::Player)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Match lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum MatchState {
    #[default]
    Playing,
    /// A side reached the winning score; physics is frozen until reset
    GameOver,
}

/// Something that happened during a tick, for audio/visual feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameEvent {
    PaddleHit,
    WallBounce,
    /// The given side scored a point
    Score(Side),
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    list: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn push(&mut self, event: GameEvent) {
        log::trace!("event: {event:?}");
        self.list.push(event);
    }

    pub fn contains(&self, event: GameEvent) -> bool {
        self.list.contains(&event)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.list.iter()
    }

    pub fn as_slice(&self) -> &[GameEvent] {
        &self.list
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

/// Discrete player intents, gathered once per tick by the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Held: re-issued every tick the key is down
    MoveUp,
    MoveDown,
    /// Only honoured after a game over
    Restart,
    Quit,
}
