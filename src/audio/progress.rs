use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use super::backend::PlayerHandle;
use super::session::{Shared, lock};
use super::types::{EventSink, PlaybackState, Progress, SessionEvent};

/// Emit a progress event every `tick` while the session is playing under
/// `generation`. The check and the emission share one critical section.
///
/// A finished stream is released and the session drops back to `Idle`.
pub(super) fn run_progress_loop<H: PlayerHandle>(
    shared: Arc<Mutex<Shared<H>>>,
    events: Arc<dyn EventSink>,
    generation: u64,
    tick: Duration,
) {
    loop {
        {
            let mut guard = lock(&shared);
            if guard.generation != generation || guard.state != PlaybackState::Playing {
                break;
            }
            let Some(handle) = guard.handle.as_ref() else {
                break;
            };

            let progress = Progress::new(handle.position(), handle.duration());
            let finished = handle.is_finished();
            events.emit(SessionEvent::Progress(progress));

            if finished {
                tracing::debug!("track finished");
                guard.reset(&*events);
                break;
            }
        }
        thread::sleep(tick);
    }
}
