use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::library::{Track, TrackCatalog};

use super::backend::{AudioBackend, PlayerHandle};
use super::cursor::PlaylistCursor;
use super::error::PlaybackError;
use super::progress::run_progress_loop;
use super::types::{EventSink, PlaybackState, Progress, SessionEvent, TrackInfo};

/// State shared between the session and its progress thread.
pub(super) struct Shared<H> {
    pub(super) state: PlaybackState,
    pub(super) handle: Option<H>,
    /// A progress loop only runs while the generation it was started with is current.
    pub(super) generation: u64,
}

impl<H: PlayerHandle> Shared<H> {
    pub(super) fn transition(&mut self, next: PlaybackState, events: &dyn EventSink) {
        if self.state == next {
            return;
        }
        tracing::debug!(from = ?self.state, to = ?next, "playback state");
        self.state = next;
        events.emit(SessionEvent::StateChanged(next));
    }

    /// Release the handle, retire any progress loop and go back to `Idle`.
    pub(super) fn reset(&mut self, events: &dyn EventSink) {
        self.generation = self.generation.wrapping_add(1);
        if let Some(mut handle) = self.handle.take() {
            handle.release();
        }
        self.transition(PlaybackState::Idle, events);
    }
}

pub(super) fn lock<H>(shared: &Mutex<Shared<H>>) -> MutexGuard<'_, Shared<H>> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owns the loaded track, its playback handle and the progress loop.
///
/// All operations are called from the front-end thread. The progress thread
/// only reads the handle and emits events, under the same lock `stop` takes,
/// so nothing is emitted once `stop` or `teardown` has returned.
pub struct PlaybackSession<B: AudioBackend> {
    backend: B,
    catalog: TrackCatalog,
    tracks: Vec<Track>,
    cursor: PlaylistCursor,
    shared: Arc<Mutex<Shared<B::Handle>>>,
    events: Arc<dyn EventSink>,
    tick: Duration,
    ticker: Option<JoinHandle<()>>,
}

impl<B: AudioBackend> PlaybackSession<B> {
    pub fn new(
        backend: B,
        catalog: TrackCatalog,
        tracks: Vec<Track>,
        events: Arc<dyn EventSink>,
        tick: Duration,
    ) -> Self {
        let cursor = PlaylistCursor::new(tracks.len());
        Self {
            backend,
            catalog,
            tracks,
            cursor,
            shared: Arc::new(Mutex::new(Shared {
                state: PlaybackState::Idle,
                handle: None,
                generation: 0,
            })),
            events,
            tick,
            ticker: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        lock(&self.shared).state
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn current_index(&self) -> Option<usize> {
        self.cursor.index()
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.cursor.index().and_then(|i| self.tracks.get(i))
    }

    /// Position and duration of the loaded handle.
    pub fn progress(&self) -> Option<Progress> {
        lock(&self.shared)
            .handle
            .as_ref()
            .map(|h| Progress::new(h.position(), h.duration()))
    }

    /// Select the track at `index` and start it from the beginning.
    pub fn play(&mut self, index: usize) -> Result<(), PlaybackError> {
        self.cursor.select(index)?;
        self.play_current()
    }

    pub fn toggle_play_pause(&mut self) -> Result<(), PlaybackError> {
        let mut shared = lock(&self.shared);
        let state = shared.state;
        match state {
            PlaybackState::Playing => {
                if let Some(handle) = shared.handle.as_mut() {
                    handle.pause();
                }
                shared.transition(PlaybackState::Paused, &*self.events);
                Ok(())
            }
            PlaybackState::Paused => {
                if let Some(handle) = shared.handle.as_mut() {
                    handle.play();
                }
                shared.transition(PlaybackState::Playing, &*self.events);
                drop(shared);
                self.spawn_progress_loop();
                Ok(())
            }
            PlaybackState::Idle | PlaybackState::Loading => {
                drop(shared);
                self.play_current()
            }
        }
    }

    /// Reposition the loaded track, clamped to `[0, duration]`. Ignored unless
    /// playing or paused. A rejected seek leaves the position and state alone.
    pub fn seek_to(&self, position_ms: i64) -> Result<(), PlaybackError> {
        let mut shared = lock(&self.shared);
        if !matches!(shared.state, PlaybackState::Playing | PlaybackState::Paused) {
            return Ok(());
        }
        let Some(handle) = shared.handle.as_mut() else {
            return Ok(());
        };

        let duration_ms = i64::try_from(handle.duration().as_millis()).unwrap_or(i64::MAX);
        let target_ms = position_ms.clamp(0, duration_ms);
        handle.seek(Duration::from_millis(target_ms as u64))?;
        tracing::debug!(requested_ms = position_ms, target_ms, "seek");

        let progress = Progress::new(handle.position(), handle.duration());
        self.events.emit(SessionEvent::Progress(progress));
        Ok(())
    }

    /// Advance the cursor and restart playback there, even when paused.
    pub fn next(&mut self) -> Result<(), PlaybackError> {
        if self.cursor.next().is_none() {
            return Ok(());
        }
        self.play_current()
    }

    /// Step the cursor back and restart playback there, even when paused.
    pub fn previous(&mut self) -> Result<(), PlaybackError> {
        if self.cursor.previous().is_none() {
            return Ok(());
        }
        self.play_current()
    }

    /// Release the handle and return to `Idle`. Safe to call repeatedly.
    pub fn stop(&mut self) {
        let mut shared = lock(&self.shared);
        if shared.handle.is_some() {
            tracing::info!("playback stopped");
        }
        shared.reset(&*self.events);
    }

    /// `stop` plus waiting for the progress thread to exit.
    pub fn teardown(&mut self) {
        self.stop();
        if let Some(ticker) = self.ticker.take() {
            if ticker.join().is_err() {
                tracing::warn!("progress thread panicked");
            }
        }
    }

    fn play_current(&mut self) -> Result<(), PlaybackError> {
        let (Some(index), Some(track)) = (self.cursor.index(), self.current_track().cloned())
        else {
            return Ok(());
        };

        {
            let mut shared = lock(&self.shared);
            shared.reset(&*self.events);
            shared.transition(PlaybackState::Loading, &*self.events);
        }

        match self.prepare(&track) {
            Ok(mut handle) => {
                handle.play();
                let mut shared = lock(&self.shared);
                shared.handle = Some(handle);
                self.events.emit(SessionEvent::TrackChanged(TrackInfo {
                    index,
                    title: track.title.clone(),
                    artist: track.artist.clone(),
                    art: track.art.clone(),
                }));
                shared.transition(PlaybackState::Playing, &*self.events);
                drop(shared);

                tracing::info!(index, file = %track.file_name, "playing");
                self.spawn_progress_loop();
                Ok(())
            }
            Err(e) => {
                lock(&self.shared).transition(PlaybackState::Idle, &*self.events);
                tracing::warn!(index, file = %track.file_name, error = %e, "cannot play track");
                Err(e)
            }
        }
    }

    fn prepare(&self, track: &Track) -> Result<B::Handle, PlaybackError> {
        let path = self.catalog.materialize(track)?;
        self.backend.open(&path)
    }

    fn spawn_progress_loop(&mut self) {
        let generation = {
            let mut shared = lock(&self.shared);
            shared.generation = shared.generation.wrapping_add(1);
            shared.generation
        };

        let shared = Arc::clone(&self.shared);
        let events = Arc::clone(&self.events);
        let tick = self.tick;
        let spawned = thread::Builder::new()
            .name("cadenza-progress".to_string())
            .spawn(move || run_progress_loop(shared, events, generation, tick));

        match spawned {
            // A replaced loop sees a stale generation and exits by itself.
            Ok(ticker) => self.ticker = Some(ticker),
            Err(e) => tracing::error!(error = %e, "cannot spawn progress thread"),
        }
    }
}

impl<B: AudioBackend> Drop for PlaybackSession<B> {
    fn drop(&mut self) {
        self.teardown();
    }
}
