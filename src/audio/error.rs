use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of playback operations. Metadata problems never show up here;
/// they fall back to defaults in the catalog.
#[derive(Error, Debug)]
pub enum PlaybackError {
    /// The track's bytes could not be read or copied.
    #[error("cannot read {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The decoder rejected the prepared stream.
    #[error("cannot decode {}: {reason}", .path.display())]
    DecodeFailed { path: PathBuf, reason: String },

    /// A cursor index outside the catalog.
    #[error("track {index} out of range (catalog has {len})")]
    OutOfRange { index: usize, len: usize },

    /// The decoder could not reposition the stream.
    #[error("cannot seek to {position_ms} ms: {reason}")]
    SeekFailed { position_ms: u64, reason: String },

    /// No audio output device could be opened.
    #[error("audio output unavailable: {0}")]
    OutputUnavailable(String),
}
