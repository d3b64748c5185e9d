use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::audio::PlaybackError;

use super::model::Track;
use super::scan::TrackCatalog;

impl TrackCatalog {
    /// Copy `track` byte for byte into the cache directory so the decoder can
    /// open it by path. A previous copy with the same file name is replaced.
    ///
    /// The copy is written beside the target and renamed over it, so a reader
    /// never sees a half-written file. When the cache directory is the music
    /// directory the source itself is returned untouched.
    pub fn materialize(&self, track: &Track) -> Result<PathBuf, PlaybackError> {
        let unavailable = |source: io::Error| PlaybackError::SourceUnavailable {
            path: track.path.clone(),
            source,
        };

        let mut input = File::open(&track.path).map_err(unavailable)?;
        fs::create_dir_all(&self.cache_dir).map_err(unavailable)?;

        let target = self.cache_dir.join(&track.file_name);
        if is_same_file(&track.path, &target) {
            tracing::debug!(path = %track.path.display(), "track already in cache dir");
            return Ok(track.path.clone());
        }

        let mut staged = NamedTempFile::new_in(&self.cache_dir).map_err(unavailable)?;
        let copied = io::copy(&mut input, staged.as_file_mut()).map_err(unavailable)?;
        staged.persist(&target).map_err(|e| unavailable(e.error))?;

        tracing::debug!(
            from = %track.path.display(),
            to = %target.display(),
            bytes = copied,
            "track materialized"
        );
        Ok(target)
    }
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
