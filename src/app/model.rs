//! Application model: what the single player screen shows.
//!
//! `App` is only ever mutated on the front-end thread, by folding in the
//! events the playback session emits.

use crate::audio::{PlaybackState, Progress, SessionEvent, TrackInfo, format_duration};

/// The main application model.
pub struct App {
    pub music_dir: String,
    pub track_count: usize,
    pub now_playing: Option<TrackInfo>,
    pub progress: Progress,
    pub playback: PlaybackState,
    /// Last non-fatal failure shown to the user, cleared when a track starts.
    pub notice: Option<String>,
}

impl App {
    /// Create a new `App` for a catalog of `track_count` tracks in `music_dir`.
    pub fn new(music_dir: String, track_count: usize) -> Self {
        Self {
            music_dir,
            track_count,
            now_playing: None,
            progress: Progress::default(),
            playback: PlaybackState::Idle,
            notice: None,
        }
    }

    /// Fold one session event into the view state.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Progress(progress) => self.progress = progress,
            SessionEvent::TrackChanged(info) => {
                self.progress = Progress::default();
                self.notice = None;
                self.now_playing = Some(info);
            }
            SessionEvent::StateChanged(state) => {
                self.playback = state;
                if state == PlaybackState::Idle {
                    self.progress.position_ms = 0;
                }
            }
        }
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    pub fn has_tracks(&self) -> bool {
        self.track_count > 0
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    /// `Artist - Title` of the loaded track.
    pub fn now_playing_text(&self) -> Option<String> {
        self.now_playing
            .as_ref()
            .map(|t| format!("{}. {} - {}", t.index + 1, t.artist, t.title))
    }

    /// `elapsed / total`, both as `M:SS`.
    pub fn time_text(&self) -> String {
        format!(
            "{} / {}",
            format_duration(self.progress.position_ms),
            format_duration(self.progress.duration_ms)
        )
    }

    /// Short description of the loaded track's cover art.
    pub fn art_text(&self) -> String {
        match self.now_playing.as_ref().and_then(|t| t.art.as_ref()) {
            Some(bytes) => format!("cover art: {:.1} KiB", bytes.len() as f64 / 1024.0),
            None => "no cover art".to_string(),
        }
    }

    /// Seek target `delta_secs` away from the last reported position.
    pub fn scrub_target_ms(&self, delta_secs: i64) -> i64 {
        self.progress.position_ms as i64 + delta_secs.saturating_mul(1000)
    }
}
