use crate::app::{App, AppEvent, AppMode};
use crate::speech::{PlaybackController, PlaybackState, SpeechError, Synthesizer};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Default)]
struct SilentSynth {
    speaking: bool,
}

impl Synthesizer for SilentSynth {
    fn speak(&mut self, _text: &str, _rate: f32, _volume: f32) -> Result<(), SpeechError> {
        self.speaking = true;
        Ok(())
    }

    fn cancel(&mut self) -> Result<(), SpeechError> {
        self.speaking = false;
        Ok(())
    }

    fn is_speaking(&self) -> bool {
        self.speaking
    }
}

fn app() -> App {
    App::new(PlaybackController::new(Box::new(SilentSynth::default())))
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::CONTROL)
}

fn type_chars(app: &mut App, chars: &str) {
    for c in chars.chars() {
        app.handle_key(press(KeyCode::Char(c)));
    }
}

#[test]
fn test_set_text_resets_typing_progress() {
    let mut app = app();
    app.set_text("the cat sat".to_string());
    app.handle_key(press(KeyCode::Tab));
    type_chars(&mut app, "the");
    assert_eq!(app.typed(), "the");

    app.set_text("new passage".to_string());
    assert_eq!(app.typed(), "");
}

#[test]
fn test_passage_edit_resets_typing_progress() {
    let mut app = app();
    app.set_text("abc".to_string());
    app.handle_key(press(KeyCode::Tab));
    type_chars(&mut app, "ab");
    assert_eq!(app.typed(), "ab");

    // Back to the passage panel; any edit invalidates progress.
    app.handle_key(press(KeyCode::Tab));
    app.handle_key(press(KeyCode::Char('d')));
    assert_eq!(app.text(), "abcd");
    assert_eq!(app.typed(), "");
}

#[test]
fn test_typing_drives_rate_while_sync_enabled() {
    let mut app = app();
    app.set_text("the cat sat".to_string());
    app.handle_key(press(KeyCode::Tab));
    type_chars(&mut app, "the ca");
    assert!((app.rate_factor() - 2.222_222).abs() < 1e-4);
}

#[test]
fn test_backspace_in_typing_panel_recomputes_rate() {
    let mut app = app();
    app.set_text("the cat sat".to_string());
    app.handle_key(press(KeyCode::Tab));
    type_chars(&mut app, "the ca");
    app.handle_key(press(KeyCode::Backspace));
    app.handle_key(press(KeyCode::Backspace));
    app.handle_key(press(KeyCode::Backspace));
    // "the" remains: one word, (1/3) * (200/60)
    assert!((app.rate_factor() - 1.111_111).abs() < 1e-4);
}

#[test]
fn test_backspace_on_empty_typing_panel_is_noop() {
    let mut app = app();
    app.set_text("abc".to_string());
    app.handle_key(press(KeyCode::Tab));
    app.handle_key(press(KeyCode::Backspace));
    assert_eq!(app.typed(), "");
}

#[test]
fn test_non_character_keys_ignored_in_typing_panel() {
    let mut app = app();
    app.set_text("abc".to_string());
    app.handle_key(press(KeyCode::Tab));
    app.handle_key(press(KeyCode::Left));
    app.handle_key(press(KeyCode::F(5)));
    app.handle_key(press(KeyCode::Home));
    assert_eq!(app.typed(), "");
}

#[test]
fn test_sync_toggle_freezes_and_manual_rate_applies() {
    let mut app = app();
    app.set_text("the cat sat".to_string());
    app.handle_key(press(KeyCode::Tab));
    type_chars(&mut app, "the ca");
    let synced = app.rate_factor();

    app.handle_key(ctrl(KeyCode::Char('s')));
    assert!(!app.sync_enabled());

    // Further typing no longer moves the rate.
    type_chars(&mut app, "t sat");
    assert_eq!(app.rate_factor(), synced);

    app.handle_key(ctrl(KeyCode::Right));
    assert!((app.rate_factor() - (synced + 0.25)).abs() < 1e-4);
}

#[test]
fn test_manual_rate_ignored_while_sync_enabled() {
    let mut app = app();
    app.set_text("the cat sat".to_string());
    let before = app.rate_factor();
    app.handle_key(ctrl(KeyCode::Right));
    assert_eq!(app.rate_factor(), before);
}

#[test]
fn test_volume_steps_and_clamps() {
    let mut app = app();
    assert_eq!(app.volume(), 1.0);
    app.handle_key(ctrl(KeyCode::Up));
    assert_eq!(app.volume(), 1.0);

    for _ in 0..20 {
        app.handle_key(ctrl(KeyCode::Down));
    }
    assert_eq!(app.volume(), 0.0);
}

#[test]
fn test_playback_toggle_from_keyboard() {
    let mut app = app();
    app.set_text("hello world".to_string());

    app.handle_key(ctrl(KeyCode::Char('p')));
    assert_eq!(app.playback_state(), PlaybackState::Speaking);

    app.handle_key(ctrl(KeyCode::Char('p')));
    assert_eq!(app.playback_state(), PlaybackState::Idle);
}

#[test]
fn test_quit_event_sets_quit_mode() {
    let mut app = app();
    app.handle_event(AppEvent::Quit);
    assert_eq!(app.mode, AppMode::Quit);
}

#[test]
fn test_failed_file_load_keeps_prior_text() {
    let mut app = app();
    app.set_text("original passage".to_string());
    app.handle_event(AppEvent::LoadFile("/nonexistent/notes.txt".to_string()));
    assert_eq!(app.text(), "original passage");
    assert!(app.status().unwrap().contains("Could not load"));
}

#[test]
fn test_clear_event_empties_passage_and_progress() {
    let mut app = app();
    app.set_text("something".to_string());
    app.handle_event(AppEvent::ClearText);
    assert_eq!(app.text(), "");
    assert_eq!(app.typed(), "");
}

#[test]
fn test_command_mode_roundtrip() {
    let mut app = app();
    app.handle_key(press(KeyCode::Esc));
    assert_eq!(app.mode, AppMode::Command);

    type_chars(&mut app, ":q");
    app.handle_key(press(KeyCode::Enter));
    assert_eq!(app.mode, AppMode::Quit);
}

#[test]
fn test_command_mode_escape_cancels() {
    let mut app = app();
    app.set_text("keep me".to_string());
    app.handle_key(press(KeyCode::Esc));
    type_chars(&mut app, ":clear");
    app.handle_key(press(KeyCode::Esc));
    assert_eq!(app.mode, AppMode::Edit);
    assert_eq!(app.text(), "keep me");
}

#[test]
fn test_render_state_snapshot() {
    let mut app = app();
    app.set_text("the cat sat".to_string());
    app.handle_key(press(KeyCode::Tab));
    type_chars(&mut app, "the ca");

    let state = app.render_state();
    assert_eq!(state.mode, AppMode::Type);
    assert_eq!(state.text, "the cat sat");
    assert_eq!(state.typed_len, 6);
    assert!(state.sync_enabled);
    assert_eq!(state.playback, PlaybackState::Idle);
}
