//! Session states and the events the session hands to the front-end.

use std::sync::mpsc::Sender;
use std::time::Duration;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// No handle loaded.
    #[default]
    Idle,
    /// A track was selected and its stream is being prepared.
    Loading,
    Playing,
    Paused,
}

impl PlaybackState {
    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Progress {
    pub position_ms: u64,
    pub duration_ms: u64,
}

impl Progress {
    pub fn new(position: Duration, duration: Duration) -> Self {
        Self {
            position_ms: position.as_millis() as u64,
            duration_ms: duration.as_millis() as u64,
        }
    }

    /// Fraction of the track played, in `[0.0, 1.0]`.
    pub fn ratio(&self) -> f64 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        (self.position_ms as f64 / self.duration_ms as f64).clamp(0.0, 1.0)
    }
}

/// What the front-end shows for the loaded track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackInfo {
    pub index: usize,
    pub title: String,
    pub artist: String,
    pub art: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Progress(Progress),
    TrackChanged(TrackInfo),
    StateChanged(PlaybackState),
}

/// Receiver side of session events. Implementations must not block: the
/// session emits while holding its state lock.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: SessionEvent);
}

impl EventSink for Sender<SessionEvent> {
    fn emit(&self, event: SessionEvent) {
        // A dropped receiver means the front-end is gone.
        let _ = self.send(event);
    }
}
