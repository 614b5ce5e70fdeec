use glam::IVec2;
use rand::Rng;
use serde::Serialize;

use crate::map::{Court, Rect};

/// Which end of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    /// Left paddle, human controlled
    Player,
    /// Right paddle, driven by the tracking controller
    Ai,
}

impl Side {
    pub fn winner_label(self) -> &'static str {
        match self {
            Side::Player => "Player Wins!",
            Side::Ai => "AI Wins!",
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub side: Side,
    pub pos: IVec2, // top-left; x never changes after spawn
    pub size: IVec2,
    pub speed: i32, // max vertical step per tick
}

impl Paddle {
    pub fn new(side: Side, pos: IVec2, size: IVec2, speed: i32) -> Self {
        Self {
            side,
            pos,
            size,
            speed,
        }
    }

    /// Shift vertically, keeping the whole paddle within [0, bounds_height]
    pub fn move_by(&mut self, delta_y: i32, bounds_height: i32) {
        let max_y = (bounds_height - self.size.y).max(0);
        self.pos.y = self.pos.y.saturating_add(delta_y).clamp(0, max_y);
    }

    /// Step toward the ball's vertical centre, at most `speed` per call
    pub fn auto_track(&mut self, ball: &Ball, bounds_height: i32) {
        let diff = ball.center().y - self.rect().center().y;
        self.move_by(diff.clamp(-self.speed, self.speed), bounds_height);
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub pos: IVec2, // top-left
    pub size: IVec2,
    pub vel: IVec2,
    pub bounds: Court,
}

impl Ball {
    pub fn new(pos: IVec2, size: IVec2, vel: IVec2, bounds: Court) -> Self {
        Self {
            pos,
            size,
            vel,
            bounds,
        }
    }

    /// Advance along y only; the x step is applied before paddle checks
    pub fn move_vertical(&mut self) {
        self.pos.y += self.vel.y;
    }

    /// Re-centre on the court and serve toward a random side
    pub fn reset(&mut self, speed: IVec2, rng: &mut crate::GameRng) {
        let center = self.bounds.center();
        self.pos = IVec2::new(center.x - self.size.x / 2, center.y - self.size.y / 2);

        let right = rng.0.gen_bool(0.5);
        let vx = if right { speed.x.abs() } else { -speed.x.abs() };
        self.vel = IVec2::new(vx, speed.y.abs());
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn center(&self) -> IVec2 {
        self.rect().center()
    }
}
