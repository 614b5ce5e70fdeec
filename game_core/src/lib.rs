pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod map;
pub mod params;
pub mod resources;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use snapshot::*;

use glam::IVec2;
use hecs::World;

/// Helper to create a paddle entity at its spawn position
pub fn create_paddle(world: &mut World, config: &Config, side: Side) -> hecs::Entity {
    let speed = match side {
        Side::Player => config.paddle_speed,
        Side::Ai => config.ai_speed,
    };
    let pos = IVec2::new(config.paddle_x(side), config.paddle_spawn_y());
    let size = IVec2::new(config.paddle_width, config.paddle_height);
    world.spawn((Paddle::new(side, pos, size, speed),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}

/// Copy of the ball, if one exists
pub fn ball_state(world: &World) -> Option<Ball> {
    world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| *ball)
}

/// Copy of one side's paddle, if it exists
pub fn paddle_state(world: &World, side: Side) -> Option<Paddle> {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == side)
        .map(|(_e, p)| *p)
}
