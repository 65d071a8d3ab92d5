/// Application events produced by the command deck.
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    ClearText,
    Quit,
    Help,
    InvalidCommand(String),
}
