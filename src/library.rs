//! The track catalog: lists the audio files of the music directory, reads
//! their artist and cover art, and copies them where the decoder can open them.

mod materialize;
mod metadata;
mod model;
mod scan;

pub use metadata::probe_duration;
pub use model::{Track, UNKNOWN_ARTIST};
pub use scan::TrackCatalog;

#[cfg(test)]
mod tests;
