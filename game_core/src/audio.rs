//! Sound cues and the sink abstraction the host plays them through.

use thiserror::Error;
use tracing::warn;

/// The two sounds the game makes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Ball bounced off a wall or a paddle
    Collision,
    /// A point was scored
    Score,
}

/// Audio failures. Only asset loading is expected to fail in practice.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Sound file could not be found or decoded.
    #[error("sound asset not available: {0}")]
    AssetMissing(String),
    /// The host has no usable audio output.
    #[error("audio output unavailable: {0}")]
    Unavailable(String),
}

/// Fire-and-forget cue playback. A new cue may cut off one still playing.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Plays nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Use the sink produced by `load`, or fall back to silence if it fails
pub fn load_or_silent<S, F>(load: F) -> Box<dyn AudioSink>
where
    S: AudioSink + 'static,
    F: FnOnce() -> Result<S, AudioError>,
{
    match load() {
        Ok(sink) => Box::new(sink),
        Err(err) => {
            warn!("{err}; using silent sounds");
            Box::new(SilentAudio)
        }
    }
}

/// Play every cue raised this tick, in order
pub fn play_cues(sink: &mut dyn AudioSink, cues: &[SoundCue]) {
    for cue in cues {
        sink.play(*cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<SoundCue>>>);

    impl AudioSink for Recorder {
        fn play(&mut self, cue: SoundCue) {
            self.0.borrow_mut().push(cue);
        }
    }

    #[test]
    fn test_loaded_sink_is_used() {
        let played = Rc::new(RefCell::new(Vec::new()));
        let log = played.clone();
        let mut sink = load_or_silent(move || Ok(Recorder(log)));

        play_cues(sink.as_mut(), &[SoundCue::Collision, SoundCue::Score]);

        assert_eq!(*played.borrow(), vec![SoundCue::Collision, SoundCue::Score]);
    }

    #[test]
    fn test_missing_asset_falls_back_to_silence() {
        let mut sink = load_or_silent(|| -> Result<Recorder, AudioError> {
            Err(AudioError::AssetMissing("beep.wav".into()))
        });

        // Must not panic
        sink.play(SoundCue::Score);
    }

    #[test]
    fn test_audio_error_messages() {
        let err = AudioError::AssetMissing("wall_collision.wav".into());
        assert_eq!(err.to_string(), "sound asset not available: wall_collision.wav");
    }
}
