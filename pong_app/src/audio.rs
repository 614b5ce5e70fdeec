//! Sound cues for engine events.
//!
//! Playback is fire-and-forget: a sink must never block the tick, and a
//! missing device only means silence.

use std::io;
use std::thread;

use crossbeam_channel::{bounded, Sender, TrySendError};
use game_core::GameEvent;
use log::{debug, trace, warn};

/// Something that can turn engine events into sound
pub trait AudioSink {
    fn play(&mut self, event: GameEvent);
}

/// Asset name for an event's cue
pub fn cue_for(event: GameEvent) -> &'static str {
    match event {
        GameEvent::PaddleHit => "paddle_hit.wav",
        GameEvent::WallBounce => "wall_bounce.wav",
        GameEvent::Score(_) => "score.wav",
    }
}

/// Used when no audio device could be opened
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _event: GameEvent) {}
}

/// Hands cues to a playback thread over a bounded queue.
///
/// A full queue drops the cue instead of waiting.
pub struct CueAudio {
    tx: Sender<&'static str>,
    dropped: u64,
}

impl CueAudio {
    /// Start the playback thread. Dropping the returned sink stops it.
    pub fn spawn(capacity: usize) -> io::Result<(Self, thread::JoinHandle<()>)> {
        let (tx, rx) = bounded::<&'static str>(capacity);

        let handle = thread::Builder::new()
            .name("audio".to_string())
            .spawn(move || {
                for cue in rx.iter() {
                    debug!(target: "audio", "play {cue}");
                }
                debug!(target: "audio", "cue queue closed");
            })?;

        Ok((Self { tx, dropped: 0 }, handle))
    }

    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl AudioSink for CueAudio {
    fn play(&mut self, event: GameEvent) {
        let cue = cue_for(event);
        match self.tx.try_send(cue) {
            Ok(()) => trace!(target: "audio", "queued {cue}"),
            Err(TrySendError::Full(_)) => {
                self.dropped += 1;
                trace!(target: "audio", "queue full, dropped {cue}");
            }
            Err(TrySendError::Disconnected(_)) => {
                if self.dropped == 0 {
                    warn!(target: "audio", "playback thread gone, cues are muted");
                }
                self.dropped += 1;
            }
        }
    }
}
