use hecs::World;

use crate::systems::movement::move_paddle;
use crate::{paddle_state, Command, Config, Side};

/// Apply this tick's movement commands to the player paddle.
///
/// Commands are applied in order, so holding both keys cancels out.
/// `Restart` and `Quit` are not movement and are skipped here.
pub fn ingest_commands(world: &mut World, commands: &[Command], config: &Config) {
    let Some(step) = paddle_state(world, Side::Player).map(|p| p.speed) else {
        return;
    };

    for command in commands {
        let delta = match command {
            Command::MoveUp => -step,
            Command::MoveDown => step,
            Command::Restart | Command::Quit => continue,
        };
        move_paddle(world, Side::Player, delta, config.court_height);
    }
}
