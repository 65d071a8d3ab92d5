use env_logger::Env;
use readalong::app::App;
use readalong::speech::{PlaybackController, SystemSynth};
use readalong::ui::TuiManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Without a synthesizer there is no interactive surface at all,
    // only a static notice.
    let synth = match SystemSynth::new() {
        Ok(synth) => synth,
        Err(err) => {
            println!("readalong: speech synthesis is not available on this system ({err})");
            return Ok(());
        }
    };

    let mut app = App::new(PlaybackController::new(Box::new(synth)));
    let mut tui = TuiManager::new()?;

    // Run the main TUI event loop; all editing, typing, playback and
    // file loading is driven from here.
    tui.run_event_loop(&mut app)?;

    Ok(())
}

/// Logging goes to a file, never to the terminal: stdout is in raw mode
/// while the TUI runs. Only active when RUST_LOG is set.
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let path = std::env::temp_dir().join("readalong.log");
    if let Ok(file) = std::fs::File::create(&path) {
        env_logger::Builder::from_env(Env::default())
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
        log::info!("readalong started, logging to {}", path.display());
    }
}
