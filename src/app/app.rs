use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::engine::{Config, RateSynchronizer};
use crate::input;
use crate::passage::{TextSource, TypingTracker};
use crate::speech::{PlaybackController, PlaybackState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const HELP_LINE: &str =
    "@path load file | @@ paste clipboard | :clear clear passage | :q quit | Esc back";

/// Composition root: the passage, the typing progress, the rate
/// synchronizer and the playback controller, plus the volume knob.
/// All mutations funnel through here so derived values (the rate factor,
/// the typing reset on text replacement) are recomputed explicitly.
pub struct App {
    pub mode: AppMode,
    source: TextSource,
    tracker: TypingTracker,
    rate: RateSynchronizer,
    playback: PlaybackController,
    volume: f32,
    config: Config,
    command_line: String,
    status: Option<String>,
}

impl App {
    pub fn new(playback: PlaybackController) -> Self {
        let config = Config::default();
        Self {
            mode: AppMode::Edit,
            source: TextSource::new(),
            tracker: TypingTracker::new(config.typed_cap),
            rate: RateSynchronizer::new(&config),
            playback,
            volume: 1.0,
            config,
            command_line: String::new(),
            status: None,
        }
    }

    pub fn text(&self) -> &str {
        self.source.text()
    }

    pub fn typed(&self) -> &str {
        self.tracker.typed()
    }

    pub fn rate_factor(&self) -> f32 {
        self.rate.factor()
    }

    pub fn sync_enabled(&self) -> bool {
        self.rate.sync_enabled()
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.playback.state()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Replace the passage. Typing progress is coupled to the text, so
    /// any replacement resets it, then the rate factor is recomputed.
    pub fn set_text(&mut self, text: String) {
        self.source.set_text(text);
        self.tracker.reset();
        self.rate
            .recompute(self.source.text(), self.tracker.typed());
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Playback and knob controls work from either panel.
        if key.modifiers.contains(KeyModifiers::CONTROL) && self.mode != AppMode::Command {
            match key.code {
                KeyCode::Char('p') => return self.toggle_playback(),
                KeyCode::Char('s') => return self.toggle_sync(),
                KeyCode::Up => return self.adjust_volume(self.config.volume_step),
                KeyCode::Down => return self.adjust_volume(-self.config.volume_step),
                KeyCode::Right => return self.adjust_rate(self.config.rate_step),
                KeyCode::Left => return self.adjust_rate(-self.config.rate_step),
                _ => {}
            }
        }

        match self.mode {
            AppMode::Edit => self.handle_edit_key(key),
            AppMode::Type => self.handle_type_key(key),
            AppMode::Command => self.handle_command_key(key),
            AppMode::Quit => {}
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoadFile(path) => match input::load(&path) {
                Ok(contents) => {
                    self.set_text(contents);
                    self.status = Some(format!("Loaded {path}"));
                    log::info!("loaded file {path}");
                }
                Err(err) => {
                    // Keep the prior passage untouched on a failed read.
                    self.status = Some(format!("Could not load {path}: {err}"));
                    log::warn!("file load failed for {path}: {err}");
                }
            },
            AppEvent::LoadClipboard => match input::clipboard::load() {
                Ok(contents) => {
                    self.set_text(contents);
                    self.status = Some("Pasted clipboard contents".to_string());
                }
                Err(err) => {
                    self.status = Some(format!("Clipboard paste failed: {err}"));
                    log::warn!("clipboard paste failed: {err}");
                }
            },
            AppEvent::ClearText => {
                self.set_text(String::new());
                self.status = Some("Passage cleared".to_string());
            }
            AppEvent::Help => self.status = Some(HELP_LINE.to_string()),
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::InvalidCommand(cmd) => {
                self.status = Some(format!("Unknown command: {cmd}"));
            }
        }
    }

    /// Reconcile displayed playback state with the synthesizer, called
    /// once per event-loop tick.
    pub fn poll_playback(&mut self) {
        self.playback.refresh();
    }

    pub fn render_state(&self) -> RenderState {
        RenderState {
            mode: self.mode,
            text: self.source.text().to_string(),
            typed_len: self.tracker.len(),
            playback: self.playback.state(),
            volume: self.volume,
            rate: self.rate.factor(),
            sync_enabled: self.rate.sync_enabled(),
            command_line: self.command_line.clone(),
            status: self.status.clone(),
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.mode = AppMode::Type,
            KeyCode::Esc => self.enter_command_mode(),
            KeyCode::Enter => self.edit_insert('\n'),
            KeyCode::Backspace => self.edit_delete_last(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit_insert(c)
            }
            _ => {}
        }
    }

    fn handle_type_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.mode = AppMode::Edit,
            KeyCode::Esc => self.enter_command_mode(),
            KeyCode::Backspace => {
                self.tracker.delete_last();
                self.rate
                    .recompute(self.source.text(), self.tracker.typed());
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.tracker.append(c);
                self.rate
                    .recompute(self.source.text(), self.tracker.typed());
            }
            // Arrow keys, function keys and other multi-character key
            // identifiers do not affect typing progress.
            _ => {}
        }
    }

    fn handle_command_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.command_line.clear();
                self.mode = AppMode::Edit;
            }
            KeyCode::Enter => {
                let command = crate::ui::parse_command(&self.command_line);
                self.command_line.clear();
                self.mode = AppMode::Edit;
                self.handle_event(crate::ui::command_to_app_event(command));
            }
            KeyCode::Backspace => {
                self.command_line.pop();
            }
            KeyCode::Char(c) => self.command_line.push(c),
            _ => {}
        }
    }

    fn enter_command_mode(&mut self) {
        self.command_line.clear();
        self.status = None;
        self.mode = AppMode::Command;
    }

    // Passage edits replace the text wholesale, matching the textarea
    // semantics: every edit invalidates typing progress.
    fn edit_insert(&mut self, ch: char) {
        let mut text = self.source.text().to_string();
        text.push(ch);
        self.set_text(text);
    }

    fn edit_delete_last(&mut self) {
        let mut text = self.source.text().to_string();
        text.pop();
        self.set_text(text);
    }

    fn toggle_playback(&mut self) {
        let result = self
            .playback
            .toggle(self.source.text(), self.rate.factor(), self.volume);
        if let Err(err) = result {
            self.status = Some(format!("Speech error: {err}"));
            log::warn!("speech request failed: {err}");
        }
    }

    fn toggle_sync(&mut self) {
        let enabled = !self.rate.sync_enabled();
        self.rate
            .set_sync_enabled(enabled, self.source.text(), self.tracker.typed());
    }

    fn adjust_volume(&mut self, delta: f32) {
        self.volume = (self.volume + delta).clamp(0.0, 1.0);
    }

    fn adjust_rate(&mut self, delta: f32) {
        // Manual rate control only applies while sync mode is off.
        self.rate.set_manual(self.rate.factor() + delta);
    }
}
