use std::env;
use std::path::PathBuf;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::{PlaybackSession, RodioBackend, SessionEvent};
use crate::library::TrackCatalog;

mod event_loop;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (mut settings, config_notice) = settings::load_settings();

    // The first argument overrides the configured music directory.
    if let Some(dir) = env::args_os().nth(1) {
        settings.library.music_dir = PathBuf::from(dir);
    }

    match logging::init_logging(&settings) {
        Ok(path) => tracing::info!(log = %path.display(), "cadenza starting"),
        Err(e) => eprintln!("cadenza: logging disabled: {e}"),
    }
    if let Some(notice) = &config_notice {
        tracing::warn!("{notice}");
    }

    let catalog = TrackCatalog::new(&settings.library);
    let tracks = catalog.list_tracks();
    let backend = RodioBackend::open_default()?;

    let music_dir = catalog.music_dir().display().to_string();
    let (event_tx, event_rx) = mpsc::channel::<SessionEvent>();
    let mut session = PlaybackSession::new(
        backend,
        catalog,
        tracks,
        Arc::new(event_tx),
        Duration::from_millis(settings.playback.progress_interval_ms),
    );
    let mut app = App::new(music_dir, session.tracks().len());
    if let Some(notice) = config_notice {
        app.notify(notice);
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &mut session, &event_rx);

    session.teardown();
    tracing::info!("cadenza stopped");

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
