use super::*;
use crate::audio::{PlaybackState, Progress, SessionEvent, TrackInfo};

fn info(index: usize, art: Option<Vec<u8>>) -> TrackInfo {
    TrackInfo {
        index,
        title: "Song".into(),
        artist: "Artist".into(),
        art,
    }
}

#[test]
fn new_app_is_idle_with_nothing_loaded() {
    let app = App::new("Music".into(), 0);
    assert!(!app.has_tracks());
    assert!(!app.is_playing());
    assert_eq!(app.now_playing_text(), None);
    assert_eq!(app.time_text(), "0:00 / 0:00");
}

#[test]
fn track_change_resets_progress_and_clears_notice() {
    let mut app = App::new("Music".into(), 2);
    app.notify("cannot read a.mp3");
    app.apply(SessionEvent::Progress(Progress {
        position_ms: 61_000,
        duration_ms: 200_000,
    }));

    app.apply(SessionEvent::TrackChanged(info(1, None)));

    assert_eq!(app.notice, None);
    assert_eq!(app.progress, Progress::default());
    assert_eq!(app.now_playing_text().as_deref(), Some("2. Artist - Song"));
}

#[test]
fn progress_and_state_events_drive_labels() {
    let mut app = App::new("Music".into(), 1);
    app.apply(SessionEvent::TrackChanged(info(0, None)));
    app.apply(SessionEvent::StateChanged(PlaybackState::Playing));
    app.apply(SessionEvent::Progress(Progress {
        position_ms: 65_000,
        duration_ms: 3_600_000,
    }));

    assert!(app.is_playing());
    assert_eq!(app.time_text(), "1:05 / 60:00");

    app.apply(SessionEvent::StateChanged(PlaybackState::Idle));
    assert!(!app.is_playing());
    assert_eq!(app.time_text(), "0:00 / 60:00");
}

#[test]
fn art_text_reports_size_or_absence() {
    let mut app = App::new("Music".into(), 1);
    assert_eq!(app.art_text(), "no cover art");

    app.apply(SessionEvent::TrackChanged(info(0, Some(vec![0u8; 2048]))));
    assert_eq!(app.art_text(), "cover art: 2.0 KiB");
}

#[test]
fn scrub_target_moves_relative_to_last_position() {
    let mut app = App::new("Music".into(), 1);
    app.apply(SessionEvent::Progress(Progress {
        position_ms: 3_000,
        duration_ms: 10_000,
    }));
    assert_eq!(app.scrub_target_ms(5), 8_000);
    // Negative targets are clamped by the session.
    assert_eq!(app.scrub_target_ms(-5), -2_000);
}
