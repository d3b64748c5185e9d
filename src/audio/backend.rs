//! The seam between the session and whatever actually decodes audio.

use std::path::Path;
use std::time::Duration;

use super::error::PlaybackError;

/// Opens a playback handle for a local file.
pub trait AudioBackend {
    type Handle: PlayerHandle + 'static;

    /// Prepare a paused handle for the file at `path`.
    fn open(&self, path: &Path) -> Result<Self::Handle, PlaybackError>;
}

/// One prepared stream. Only ever touched under the session lock.
pub trait PlayerHandle: Send {
    fn play(&mut self);
    fn pause(&mut self);
    fn position(&self) -> Duration;
    fn duration(&self) -> Duration;
    fn seek(&mut self, to: Duration) -> Result<(), PlaybackError>;
    /// True once the stream has played to its end.
    fn is_finished(&self) -> bool;
    /// Stop output and free the stream. Must be idempotent.
    fn release(&mut self);
}
