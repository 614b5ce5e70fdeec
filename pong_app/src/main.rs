//! Application entry point.

use std::io;

use game_core::{Config, GameEngine};
use log::{error, info, warn};
use pong_app::{
    App, AppConfig, AudioSink, Autopilot, CueAudio, InputMode, InputSource, JsonLinesRenderer,
    KeyboardInput, LoopSettings, NullAudio,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app_config = AppConfig::from_env().map_err(|e| {
        error!("Bad configuration: {e}");
        e
    })?;
    info!("Seed {}", app_config.seed);

    let engine = GameEngine::new(Config::new(), app_config.seed).map_err(|e| {
        error!("Failed to build engine: {e}");
        e
    })?;

    // A missing audio device is not fatal; the game just plays silently
    let mut audio_thread = None;
    let audio: Box<dyn AudioSink> = match CueAudio::spawn(app_config.audio_queue) {
        Ok((audio, handle)) => {
            audio_thread = Some(handle);
            Box::new(audio)
        }
        Err(e) => {
            warn!("Audio unavailable, continuing without sound: {e}");
            Box::new(NullAudio)
        }
    };

    let input: Box<dyn InputSource> = match app_config.input {
        InputMode::Autopilot => Box::new(Autopilot::new(app_config.matches)),
        InputMode::Keyboard => {
            info!("Reading keys from stdin: w/s move, space restarts, Escape quits");
            Box::new(KeyboardInput::new(io::stdin().lock()))
        }
    };

    let settings = LoopSettings {
        frame_duration: app_config.frame_duration(),
        max_ticks: app_config.max_ticks,
        render_every: app_config.render_every,
    };

    let mut app = App::new(
        engine,
        input,
        Box::new(JsonLinesRenderer::new(io::stdout().lock())),
        audio,
        settings,
    );
    let summary = app.run();
    drop(app);

    if let Some(handle) = audio_thread {
        if handle.join().is_err() {
            error!("Audio thread panicked");
        }
    }

    info!(
        "Final score {}-{} after {} ticks",
        summary.last_score.player, summary.last_score.ai, summary.ticks
    );
    Ok(())
}
