use super::mode::AppMode;
use crate::speech::PlaybackState;

/// Snapshot of everything the UI needs for one frame.
pub struct RenderState {
    pub mode: AppMode,
    pub text: String,
    /// Length of the typed prefix in characters, for highlighting.
    pub typed_len: usize,
    pub playback: PlaybackState,
    pub volume: f32,
    pub rate: f32,
    pub sync_enabled: bool,
    pub command_line: String,
    pub status: Option<String>,
}
