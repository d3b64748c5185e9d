//! `rodio` implementation of the playback backend.
//!
//! One output stream is opened for the life of the backend; each handle is a
//! paused `Sink` with the decoded file appended.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use crate::library::probe_duration;

use super::backend::{AudioBackend, PlayerHandle};
use super::error::PlaybackError;

pub struct RodioBackend {
    stream: OutputStream,
}

impl RodioBackend {
    pub fn open_default() -> Result<Self, PlaybackError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PlaybackError::OutputUnavailable(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped, which garbles the TUI.
        stream.log_on_drop(false);
        Ok(Self { stream })
    }
}

impl AudioBackend for RodioBackend {
    type Handle = SinkHandle;

    fn open(&self, path: &Path) -> Result<SinkHandle, PlaybackError> {
        let source = decode(path)?;

        let duration = source
            .total_duration()
            .or_else(|| probe_duration(path))
            .unwrap_or(Duration::ZERO);

        let sink = Sink::connect_new(self.stream.mixer());
        sink.pause();
        sink.append(source);

        Ok(SinkHandle {
            sink,
            duration,
            released: false,
        })
    }
}

/// Decoder for the file at `path`. Built from the `File` itself so the
/// decoder knows the byte length and can seek in both directions.
fn decode(path: &Path) -> Result<Decoder<BufReader<File>>, PlaybackError> {
    let file = File::open(path).map_err(|source| PlaybackError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    Decoder::try_from(file).map_err(|e| PlaybackError::DecodeFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

pub struct SinkHandle {
    sink: Sink,
    duration: Duration,
    released: bool,
}

impl PlayerHandle for SinkHandle {
    fn play(&mut self) {
        if !self.released {
            self.sink.play();
        }
    }

    fn pause(&mut self) {
        if !self.released {
            self.sink.pause();
        }
    }

    fn position(&self) -> Duration {
        if self.released {
            return Duration::ZERO;
        }
        self.sink.get_pos()
    }

    fn duration(&self) -> Duration {
        self.duration
    }

    fn seek(&mut self, to: Duration) -> Result<(), PlaybackError> {
        if self.released {
            return Ok(());
        }
        self.sink
            .try_seek(to)
            .map_err(|e| PlaybackError::SeekFailed {
                position_ms: to.as_millis() as u64,
                reason: e.to_string(),
            })
    }

    fn is_finished(&self) -> bool {
        !self.released && self.sink.empty()
    }

    fn release(&mut self) {
        if !self.released {
            self.sink.stop();
            self.released = true;
        }
    }
}

impl Drop for SinkHandle {
    fn drop(&mut self) {
        self.release();
    }
}
