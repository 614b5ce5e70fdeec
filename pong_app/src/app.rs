//=========================================================================
// Application loop
//
// Fixed-rate driver around the engine:
//
// ```text
//   InputSource ──poll──> App ──handle_input/update──> GameEngine
//                          │
//                          ├──events──> AudioSink
//                          └──snapshot──> Renderer
// ```
//
// The engine is the only thing mutated per tick. Collaborator failures are
// logged and the simulation carries on.
//=========================================================================

use std::thread;
use std::time::{Duration, Instant};

use game_core::{Command, GameEngine, RenderSnapshot, Score};
use log::{info, warn};

use crate::audio::AudioSink;
use crate::input::InputSource;
use crate::render::Renderer;

/// Whether the loop should keep going after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSettings {
    /// `None` runs ticks back to back
    pub frame_duration: Option<Duration>,
    /// 0 means no limit
    pub max_ticks: u64,
    pub render_every: u64,
}

impl Default for LoopSettings {
    fn default() -> Self {
        Self {
            frame_duration: None,
            max_ticks: 0,
            render_every: 1,
        }
    }
}

/// What a finished run looked like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub matches_finished: u32,
    pub last_score: Score,
}

pub struct App {
    engine: GameEngine,
    input: Box<dyn InputSource>,
    renderer: Box<dyn Renderer>,
    audio: Box<dyn AudioSink>,
    settings: LoopSettings,
    view: RenderSnapshot,
    frames: u64,
    matches_finished: u32,
    last_score: Score,
    renderer_failed: bool,
}

impl App {
    pub fn new(
        engine: GameEngine,
        input: Box<dyn InputSource>,
        renderer: Box<dyn Renderer>,
        audio: Box<dyn AudioSink>,
        settings: LoopSettings,
    ) -> Self {
        let view = engine.snapshot();
        let last_score = view.score;
        Self {
            engine,
            input,
            renderer,
            audio,
            settings,
            view,
            frames: 0,
            matches_finished: 0,
            last_score,
            renderer_failed: false,
        }
    }

    /// Run until the input source quits or the tick limit is hit
    pub fn run(&mut self) -> RunSummary {
        info!(
            "Starting loop (frame: {:?}, max ticks: {})",
            self.settings.frame_duration, self.settings.max_ticks
        );

        loop {
            let frame_start = Instant::now();

            if self.tick() == TickControl::Exit {
                break;
            }

            if let Some(frame) = self.settings.frame_duration {
                let elapsed = frame_start.elapsed();
                if elapsed < frame {
                    thread::sleep(frame - elapsed);
                }
            }
        }

        let summary = self.summary();
        info!(
            "Loop finished after {} ticks, {} match(es) decided",
            summary.ticks, summary.matches_finished
        );
        summary
    }

    /// One frame: input, simulation, audio, render
    pub fn tick(&mut self) -> TickControl {
        //--- 1. Input ---------------------------------------------------
        let commands = self.input.poll(&self.view);
        if commands.contains(&Command::Quit) {
            info!("Quit requested");
            return TickControl::Exit;
        }
        self.engine.handle_input(&commands);

        //--- 2. Simulation ----------------------------------------------
        let was_over = self.engine.is_game_over();
        for event in self.engine.update().iter() {
            self.audio.play(*event);
        }
        self.frames += 1;

        //--- 3. Render --------------------------------------------------
        self.view = self.engine.snapshot();
        self.last_score = self.view.score;
        let just_ended = self.view.game_over && !was_over;
        if just_ended {
            self.matches_finished += 1;
            info!(
                "{} ({}-{})",
                self.view.winner.unwrap_or("Game over"),
                self.view.score.player,
                self.view.score.ai
            );
        }
        if just_ended || self.frames % self.settings.render_every.max(1) == 0 {
            self.draw();
        }

        if self.settings.max_ticks > 0 && self.frames >= self.settings.max_ticks {
            info!("Tick limit reached");
            return TickControl::Exit;
        }
        TickControl::Continue
    }

    fn draw(&mut self) {
        if self.renderer_failed {
            return;
        }
        if let Err(e) = self.renderer.render(&self.view) {
            warn!("Renderer failed, continuing without output: {e}");
            self.renderer_failed = true;
        }
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            ticks: self.frames,
            matches_finished: self.matches_finished,
            last_score: self.last_score,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }
}
