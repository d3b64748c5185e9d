use std::sync::mpsc::Receiver;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::{PlaybackSession, RodioBackend, SessionEvent};
use crate::config;
use crate::ui;

/// Main terminal event loop: folds session events into `app`, draws, and
/// turns key presses into session operations. Returns `Ok(())` on quit.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    session: &mut PlaybackSession<RodioBackend>,
    events: &Receiver<SessionEvent>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Progress is computed on the session's thread; only this loop touches the view.
        while let Ok(event) = events.try_recv() {
            app.apply(event);
        }

        terminal.draw(|f| ui::draw(f, app, &settings.controls))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, session) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply one key press. Returns `true` when the user asked to quit.
///
/// Playback failures are non-fatal: they are logged and shown in the notice
/// line, and the session stays idle until the next command.
fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    session: &mut PlaybackSession<RodioBackend>,
) -> bool {
    let scrub = settings.controls.scrub_seconds.min(i64::MAX as u64) as i64;

    // Scrub from the live position rather than the last drawn one.
    if let Some(progress) = session.progress() {
        app.progress = progress;
    }

    let result = match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('p') | KeyCode::Char(' ') => session.toggle_play_pause(),
        KeyCode::Char('l') => session.next(),
        KeyCode::Char('h') => session.previous(),
        KeyCode::Char('L') => session.seek_to(app.scrub_target_ms(scrub)),
        KeyCode::Char('H') => session.seek_to(app.scrub_target_ms(-scrub)),
        KeyCode::Enter => match session.current_index() {
            Some(index) => session.play(index),
            None => Ok(()),
        },
        KeyCode::Char(c @ '1'..='9') => session.play(digit_index(c)),
        KeyCode::Char('s') => {
            session.stop();
            Ok(())
        }
        _ => Ok(()),
    };

    if let Err(e) = result {
        tracing::warn!(error = %e, "playback command failed");
        app.notify(e.to_string());
    }
    false
}

/// Catalog index picked by a digit key: `1` is the first track.
fn digit_index(c: char) -> usize {
    c as usize - '1' as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_keys_pick_one_based_catalog_positions() {
        assert_eq!(digit_index('1'), 0);
        assert_eq!(digit_index('4'), 3);
        assert_eq!(digit_index('9'), 8);
    }
}
