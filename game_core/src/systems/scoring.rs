use crate::{Ball, Config, Events, GameEvent, GameRng, Score, Side};
use hecs::World;

/// Check if the ball crossed a goal line.
///
/// Returns the side that scored, after the ball has been re-served. The left
/// goal is checked first, so the AI wins a tick where both lines are crossed.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    let mut scorer = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let rect = ball.rect();
        let side = if rect.left() <= 0 {
            Side::Ai
        } else if rect.right() >= config.court_width {
            Side::Player
        } else {
            continue;
        };

        score.increment(side);
        events.push(GameEvent::Score(side));
        log::debug!(
            "{side:?} scored at x={}, score is {}-{}",
            rect.left(),
            score.player,
            score.ai
        );

        ball.reset(config.ball_speed(), rng);
        scorer = Some(side);
    }

    scorer
}
