pub mod playback;
pub mod synth;

pub use playback::{PlaybackController, PlaybackState};
pub use synth::{SpeechError, Synthesizer, SystemSynth};
