use crate::{ball_state, Paddle, Side};
use hecs::World;

/// Tracking controller for the AI paddle.
///
/// Follows the ball's vertical centre a fixed step at a time; no prediction
/// and no randomness, so the same ball path always produces the same paddle
/// path.
pub fn track_ball(world: &mut World, bounds_height: i32) {
    let Some(ball) = ball_state(world) else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Ai {
            paddle.auto_track(&ball, bounds_height);
        }
    }
}
