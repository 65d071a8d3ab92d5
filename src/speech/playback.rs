use super::synth::{SpeechError, Synthesizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Speaking,
}

/// Start/stop control over the synthesizer.
///
/// Toggling while the synthesizer reports speaking cancels the utterance;
/// otherwise a speak request is issued with the caller's current snapshot
/// of text, rate and volume. The transition to Speaking is optimistic
/// (set on request, not on a confirmation from the backend); `refresh`
/// reconciles back to Idle once the utterance has finished on its own.
pub struct PlaybackController {
    synth: Box<dyn Synthesizer>,
    state: PlaybackState,
}

impl PlaybackController {
    pub fn new(synth: Box<dyn Synthesizer>) -> Self {
        Self {
            synth,
            state: PlaybackState::Idle,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn toggle(&mut self, text: &str, rate: f32, volume: f32) -> Result<(), SpeechError> {
        if self.synth.is_speaking() {
            self.synth.cancel()?;
            self.state = PlaybackState::Idle;
        } else {
            self.synth.speak(text, rate, volume)?;
            self.state = PlaybackState::Speaking;
        }
        Ok(())
    }

    /// Reconcile with the backend's out-of-band speaking signal. Called
    /// once per event-loop tick.
    pub fn refresh(&mut self) {
        if self.state == PlaybackState::Speaking && !self.synth.is_speaking() {
            self.state = PlaybackState::Idle;
        }
    }
}
