/// Input focus state machine.
///
/// Edit and Type are the two interactive panels; Command is the one-line
/// deck for file loading and app commands; Quit ends the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Edit,
    Type,
    Command,
    Quit,
}
