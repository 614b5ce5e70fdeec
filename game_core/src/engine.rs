use hecs::World;
use log::info;

use crate::map::Court;
use crate::snapshot::{RenderSnapshot, RESTART_INSTRUCTIONS};
use crate::systems::*;
use crate::{
    ball_state, create_ball, create_paddle, paddle_state, Ball, Command, Config, ConfigError,
    Events, GameRng, MatchState, Paddle, Score, Side,
};

/// Pong simulation: two paddles, one ball, the score and the match state.
///
/// The engine is driven from outside, one tick at a time: collect the tick's
/// [`Command`]s, pass them to [`GameEngine::handle_input`], then call
/// [`GameEngine::update`] and act on the returned events. Nothing here
/// blocks, sleeps or touches a device.
pub struct GameEngine {
    world: World,
    config: Config,
    court: Court,
    score: Score,
    events: Events,
    rng: GameRng,
    state: MatchState,
    winner: Option<Side>,
    tick: u64,
}

impl GameEngine {
    /// Build an engine, failing fast on an unusable configuration
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let court = Court::new(config.court_width, config.court_height);
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        create_paddle(&mut world, &config, Side::Player);
        create_paddle(&mut world, &config, Side::Ai);

        let mut ball = Ball::new(
            config.ball_spawn(),
            glam::IVec2::splat(config.ball_size),
            glam::IVec2::ZERO,
            court,
        );
        ball.reset(config.ball_speed(), &mut rng);
        create_ball(&mut world, ball);

        info!(
            "Engine ready: court {}x{}, first to {}",
            court.width, court.height, config.win_score
        );

        Ok(Self {
            world,
            config,
            court,
            score: Score::new(),
            events: Events::new(),
            rng,
            state: MatchState::Playing,
            winner: None,
            tick: 0,
        })
    }

    /// Apply one tick's worth of commands.
    ///
    /// Movement is only honoured while playing; `Restart` only after a game
    /// over. `Quit` belongs to the driving loop and is ignored.
    pub fn handle_input(&mut self, commands: &[Command]) {
        match self.state {
            MatchState::Playing => ingest_commands(&mut self.world, commands, &self.config),
            MatchState::GameOver => {
                if commands.contains(&Command::Restart) {
                    self.reset_game();
                }
            }
        }
    }

    /// Advance the simulation by one tick and return what happened.
    ///
    /// Does nothing while the match is over.
    pub fn update(&mut self) -> &Events {
        self.events.clear();
        if self.state == MatchState::GameOver {
            return &self.events;
        }
        self.tick += 1;

        // 1. Horizontal move, resolved against the paddles before anything else
        move_ball_horizontal(&mut self.world);

        // 2-3. Paddle hits
        check_paddle_hits(&mut self.world, &mut self.events);

        // 4-5. Vertical move and wall bounces
        move_ball_vertical(&mut self.world);
        check_walls(&mut self.world, &self.config, &mut self.events);

        // 6. Goals
        let scored = check_scoring(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
        if scored.is_some() {
            if let Some(side) = self.score.has_winner(self.config.win_score) {
                self.winner = Some(side);
                self.state = MatchState::GameOver;
                info!(
                    "Game over after {} ticks: {} ({}-{})",
                    self.tick,
                    side.winner_label(),
                    self.score.player,
                    self.score.ai
                );
            }
        }

        // 7. Opponent
        track_ball(&mut self.world, self.court.height);

        &self.events
    }

    /// Zero the score, clear the winner and re-serve. Paddles stay put.
    pub fn reset_game(&mut self) {
        self.score = Score::new();
        self.winner = None;
        self.state = MatchState::Playing;
        self.events.clear();

        let speed = self.config.ball_speed();
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(speed, &mut self.rng);
        }

        info!("Game reset");
    }

    /// Plain-data view of the current frame. An entity removed through
    /// [`GameEngine::world_mut`] shows up as an empty rect.
    pub fn snapshot(&self) -> RenderSnapshot {
        let game_over = self.is_game_over();
        RenderSnapshot {
            tick: self.tick,
            court: self.court,
            midline_x: self.court.midline_x(),
            player: self.paddle(Side::Player).map(|p| p.rect()).unwrap_or_default(),
            ai: self.paddle(Side::Ai).map(|p| p.rect()).unwrap_or_default(),
            ball: self.ball().map(|b| b.rect()).unwrap_or_default(),
            score: self.score,
            game_over,
            winner: self.winner.map(Side::winner_label),
            instructions: game_over.then_some(RESTART_INSTRUCTIONS),
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == MatchState::GameOver
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn player_score(&self) -> u8 {
        self.score.player
    }

    pub fn ai_score(&self) -> u8 {
        self.score.ai
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ball(&self) -> Option<Ball> {
        ball_state(&self.world)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        paddle_state(&self.world, side)
    }

    /// Direct access to the entities, for scripted scenarios and tests
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
