//! UI rendering for the single player screen.
//!
//! This module renders the `App` model with `ratatui`; it never talks to the
//! playback session directly.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style, Stylize},
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::App;
use crate::audio::PlaybackState;
use crate::config::ControlsSettings;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("space/p", "play/pause");
    map.insert("h/l", "prev/next song");
    // H/L is filled dynamically from config.
    map.insert("enter", "restart song");
    map.insert("1-9", "play song n");
    map.insert("s", "stop");
    map.insert("q", "quit");
    map
});

/// Render the controls help text, incorporating scrub seconds.
fn controls_text(scrub_seconds: u64) -> String {
    let order = ["space/p", "h/l", "H/L", "enter", "1-9", "s", "q"];
    order
        .iter()
        .filter_map(|k| {
            if *k == "H/L" {
                Some(format!("[H/L] scrub -/+{}s", scrub_seconds))
            } else {
                CONTROLS_MAP.get(k).map(|v| format!("[{}] {}", k, v))
            }
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

fn state_text(state: PlaybackState) -> &'static str {
    match state {
        PlaybackState::Idle => "Stopped",
        PlaybackState::Loading => "Loading",
        PlaybackState::Playing => "Playing",
        PlaybackState::Paused => "Paused",
    }
}

fn padded(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

/// Render the entire UI into the provided `frame`.
pub fn draw(frame: &mut Frame, app: &App, controls_settings: &ControlsSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(format!("{} • {} tracks", app.music_dir, app.track_count))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" cadenza ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let now_playing = match app.now_playing_text() {
        Some(song) => format!(
            "{}\n{}\n{}",
            song,
            state_text(app.playback),
            app.art_text()
        ),
        None if app.has_tracks() => "Nothing loaded. Press space to play.".to_string(),
        None => "No audio files found.".to_string(),
    };
    let now_playing = Paragraph::new(now_playing)
        .block(padded(" now playing "))
        .wrap(Wrap { trim: true });
    frame.render_widget(now_playing, chunks[1]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" position "))
        .gauge_style(Style::default().add_modifier(Modifier::REVERSED))
        .ratio(app.progress.ratio())
        .label(app.time_text());
    frame.render_widget(gauge, chunks[2]);

    if let Some(notice) = &app.notice {
        let notice = Paragraph::new(notice.as_str())
            .bold()
            .block(padded(" notice "))
            .wrap(Wrap { trim: true });
        frame.render_widget(notice, chunks[3]);
    }

    let footer = Paragraph::new(controls_text(controls_settings.scrub_seconds))
        .block(padded(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_text_lists_keys_in_order_with_scrub_seconds() {
        assert_eq!(
            controls_text(7),
            "[space/p] play/pause | [h/l] prev/next song | [H/L] scrub -/+7s | \
             [enter] restart song | [1-9] play song n | [s] stop | [q] quit"
        );
    }
}
