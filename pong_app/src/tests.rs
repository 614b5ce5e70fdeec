use crate::*;
use game_core::{Ball, Command, Config, GameEngine, GameEvent, RenderSnapshot, Side};
use glam::IVec2;
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

#[derive(Clone, Default)]
struct MockAudio {
    played: Rc<RefCell<Vec<GameEvent>>>,
}

impl AudioSink for MockAudio {
    fn play(&mut self, event: GameEvent) {
        self.played.borrow_mut().push(event);
    }
}

#[derive(Clone, Default)]
struct MockRenderer {
    frames: Rc<RefCell<Vec<RenderSnapshot>>>,
    fail: bool,
}

impl Renderer for MockRenderer {
    fn render(&mut self, snapshot: &RenderSnapshot) -> io::Result<()> {
        self.frames.borrow_mut().push(snapshot.clone());
        if self.fail {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "viewer went away"))
        } else {
            Ok(())
        }
    }
}

fn engine_with(config: Config) -> GameEngine {
    GameEngine::new(config, 42).expect("valid config")
}

fn place_ball(engine: &mut GameEngine, pos: IVec2, vel: IVec2) {
    for (_e, ball) in engine.world_mut().query_mut::<&mut Ball>() {
        ball.pos = pos;
        ball.vel = vel;
    }
}

fn settings(render_every: u64) -> LoopSettings {
    LoopSettings {
        frame_duration: None,
        max_ticks: 0,
        render_every,
    }
}

#[test]
fn test_quit_stops_before_simulating() {
    let renderer = MockRenderer::default();
    let mut app = App::new(
        engine_with(Config::new()),
        Box::new(ScriptedInput::new(Vec::new())),
        Box::new(renderer.clone()),
        Box::new(NullAudio),
        settings(1),
    );

    let summary = app.run();

    assert_eq!(summary.ticks, 0);
    assert_eq!(app.engine().tick(), 0);
    assert!(renderer.frames.borrow().is_empty());
}

#[test]
fn test_events_reach_audio() {
    let mut engine = engine_with(Config::new());
    place_ball(&mut engine, IVec2::new(798, 100), IVec2::new(7, 5));
    let audio = MockAudio::default();

    let mut app = App::new(
        engine,
        Box::new(ScriptedInput::new(vec![vec![]])),
        Box::new(MockRenderer::default()),
        Box::new(audio.clone()),
        settings(1),
    );

    assert_eq!(app.tick(), TickControl::Continue);
    assert_eq!(
        audio.played.borrow().as_slice(),
        &[GameEvent::Score(Side::Player)]
    );
    assert_eq!(app.engine().player_score(), 1);
}

#[test]
fn test_render_cadence() {
    let renderer = MockRenderer::default();
    let mut app = App::new(
        engine_with(Config::new()),
        Box::new(ScriptedInput::new(vec![vec![]; 7])),
        Box::new(renderer.clone()),
        Box::new(NullAudio),
        settings(3),
    );

    let summary = app.run();

    assert_eq!(summary.ticks, 7);
    let ticks: Vec<u64> = renderer.frames.borrow().iter().map(|f| f.tick).collect();
    assert_eq!(ticks, vec![3, 6]);
}

#[test]
fn test_game_over_frame_always_rendered() {
    let mut engine = engine_with(Config {
        win_score: 1,
        ..Config::new()
    });
    place_ball(&mut engine, IVec2::new(3, 40), IVec2::new(-7, 5));
    let renderer = MockRenderer::default();

    let mut app = App::new(
        engine,
        Box::new(ScriptedInput::new(vec![vec![]])),
        Box::new(renderer.clone()),
        Box::new(NullAudio),
        settings(1_000),
    );

    let summary = app.run();

    assert_eq!(summary.matches_finished, 1);
    assert_eq!(summary.last_score.ai, 1);
    let frames = renderer.frames.borrow();
    assert_eq!(frames.len(), 1);
    assert!(frames[0].game_over);
    assert_eq!(frames[0].winner, Some("AI Wins!"));
}

#[test]
fn test_restart_after_game_over() {
    let mut engine = engine_with(Config {
        win_score: 1,
        ..Config::new()
    });
    place_ball(&mut engine, IVec2::new(3, 40), IVec2::new(-7, 5));

    let mut app = App::new(
        engine,
        Box::new(ScriptedInput::new(vec![vec![], vec![Command::Restart]])),
        Box::new(MockRenderer::default()),
        Box::new(NullAudio),
        settings(1),
    );

    app.tick();
    assert!(app.engine().is_game_over());

    app.tick();
    assert!(!app.engine().is_game_over());
    assert_eq!(app.engine().ai_score(), 0);
    assert_eq!(app.engine().winner(), None);
}

#[test]
fn test_failing_renderer_does_not_stop_simulation() {
    let renderer = MockRenderer {
        fail: true,
        ..MockRenderer::default()
    };
    let mut app = App::new(
        engine_with(Config::new()),
        Box::new(ScriptedInput::new(vec![vec![]; 20])),
        Box::new(renderer.clone()),
        Box::new(NullAudio),
        settings(1),
    );

    let summary = app.run();

    assert_eq!(summary.ticks, 20);
    assert_eq!(app.engine().tick(), 20);
    assert_eq!(renderer.frames.borrow().len(), 1, "renderer is dropped after failing");
}

#[test]
fn test_tick_limit() {
    let mut app = App::new(
        engine_with(Config::new()),
        Box::new(Autopilot::new(1)),
        Box::new(MockRenderer::default()),
        Box::new(NullAudio),
        LoopSettings {
            max_ticks: 50,
            ..settings(10)
        },
    );

    let summary = app.run();

    assert_eq!(summary.ticks, 50);
    assert_eq!(summary.matches_finished, 0);
}
