use crate::{Ball, Paddle, Side};
use hecs::World;

/// Advance the ball along x. Paddle hits are resolved against this position.
pub fn move_ball_horizontal(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos.x += ball.vel.x;
    }
}

/// Advance the ball along y
pub fn move_ball_vertical(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.move_vertical();
    }
}

/// Shift one side's paddle, clamped to the court
pub fn move_paddle(world: &mut World, side: Side, delta_y: i32, bounds_height: i32) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == side {
            paddle.move_by(delta_y, bounds_height);
        }
    }
}
