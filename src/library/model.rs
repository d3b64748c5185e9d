use std::path::PathBuf;

/// Artist shown when a file carries no readable artist tag.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// One audio file of the catalog. Immutable once listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// File name inside the music directory, e.g. `song.mp3`.
    pub file_name: String,
    pub path: PathBuf,
    /// File name without its extension.
    pub title: String,
    pub artist: String,
    /// Embedded cover art bytes, if the file has any.
    pub art: Option<Vec<u8>>,
}
