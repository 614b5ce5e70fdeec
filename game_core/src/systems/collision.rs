use crate::{ball_state, paddle_state, Ball, Config, Events, GameEvent, Side};
use hecs::World;

/// Bounce the ball off paddles it overlaps while moving toward them.
///
/// The player paddle is checked first, then the AI paddle, each against the
/// ball position left by the previous check. A hit snaps the ball flush
/// against the paddle face so it cannot tunnel or stick.
pub fn check_paddle_hits(world: &mut World, events: &mut Events) {
    let Some(mut ball) = ball_state(world) else {
        return; // No ball in world
    };

    let mut hit = false;
    for side in [Side::Player, Side::Ai] {
        let Some(paddle) = paddle_state(world, side) else {
            continue;
        };
        if !ball.rect().intersects(&paddle.rect()) {
            continue;
        }

        let paddle_rect = paddle.rect();
        match side {
            Side::Player if ball.vel.x < 0 => {
                ball.vel.x = -ball.vel.x;
                ball.pos.x = paddle_rect.right();
            }
            Side::Ai if ball.vel.x > 0 => {
                ball.vel.x = -ball.vel.x;
                ball.pos.x = paddle_rect.left() - ball.size.x;
            }
            _ => continue,
        }

        events.push(GameEvent::PaddleHit);
        hit = true;
    }

    if hit {
        write_ball(world, ball);
    }
}

/// Bounce the ball off the top and bottom walls
pub fn check_walls(world: &mut World, config: &Config, events: &mut Events) {
    let Some(mut ball) = ball_state(world) else {
        return;
    };

    let rect = ball.rect();
    if rect.top() > 0 && rect.bottom() < config.court_height {
        return;
    }

    ball.vel.y = -ball.vel.y;
    if config.clamp_wall_bounce {
        ball.pos.y = ball.pos.y.clamp(0, config.court_height - ball.size.y);
    }
    events.push(GameEvent::WallBounce);

    write_ball(world, ball);
}

fn write_ball(world: &mut World, updated: Ball) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        *ball = updated;
    }
}
