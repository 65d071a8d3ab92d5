use thiserror::Error;
use tts::Tts;

#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("no speech synthesis backend: {0}")]
    Unavailable(tts::Error),

    #[error("speech backend error: {0}")]
    Backend(#[from] tts::Error),
}

/// Seam over the platform speech capability.
///
/// `speak` is fire-and-forget: the utterance plays asynchronously and the
/// backend reports progress only through `is_speaking`. Callers are
/// expected to avoid `speak` while already speaking.
pub trait Synthesizer {
    fn speak(&mut self, text: &str, rate: f32, volume: f32) -> Result<(), SpeechError>;
    fn cancel(&mut self) -> Result<(), SpeechError>;
    fn is_speaking(&self) -> bool;
}

/// The platform synthesizer, via the `tts` crate.
///
/// Construction failure means the platform has no usable backend; the
/// caller renders a static notice instead of the interactive surface.
pub struct SystemSynth {
    tts: Tts,
}

impl SystemSynth {
    pub fn new() -> Result<Self, SpeechError> {
        let tts = Tts::default().map_err(SpeechError::Unavailable)?;
        if let Ok(voices) = tts.voices() {
            log::info!("speech backend ready with {} voices", voices.len());
        }
        Ok(Self { tts })
    }

    // Our multiplier treats 1.0 as normal speed; backends expose their
    // own rate scale, so map through normal_rate and clamp to the
    // backend's bounds.
    fn backend_rate(&self, factor: f32) -> f32 {
        let scaled = self.tts.normal_rate() * factor;
        scaled.clamp(self.tts.min_rate(), self.tts.max_rate())
    }

    fn backend_volume(&self, volume: f32) -> f32 {
        let min = self.tts.min_volume();
        let max = self.tts.max_volume();
        min + (max - min) * volume.clamp(0.0, 1.0)
    }
}

impl Synthesizer for SystemSynth {
    fn speak(&mut self, text: &str, rate: f32, volume: f32) -> Result<(), SpeechError> {
        let backend_rate = self.backend_rate(rate);
        let backend_volume = self.backend_volume(volume);
        self.tts.set_rate(backend_rate)?;
        self.tts.set_volume(backend_volume)?;
        self.tts.speak(text.to_string(), true)?;
        log::debug!("speak request: {} chars at {rate:.2}x", text.len());
        Ok(())
    }

    fn cancel(&mut self) -> Result<(), SpeechError> {
        self.tts.stop()?;
        Ok(())
    }

    fn is_speaking(&self) -> bool {
        // Backends that cannot report this are treated as silent.
        self.tts.is_speaking().unwrap_or(false)
    }
}
