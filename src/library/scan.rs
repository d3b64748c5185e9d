use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::metadata::TrackTags;
use super::model::Track;

/// The bundled music directory plus the cache tracks are materialized into.
#[derive(Debug, Clone)]
pub struct TrackCatalog {
    pub(super) music_dir: PathBuf,
    pub(super) cache_dir: PathBuf,
    extensions: Vec<String>,
}

impl TrackCatalog {
    pub fn new(settings: &LibrarySettings) -> Self {
        Self::with_dirs(
            settings.music_dir.clone(),
            settings.resolved_cache_dir(),
            &settings.extensions,
        )
    }

    pub fn with_dirs(music_dir: PathBuf, cache_dir: PathBuf, extensions: &[String]) -> Self {
        let extensions = extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self {
            music_dir,
            cache_dir,
            extensions,
        }
    }

    pub fn music_dir(&self) -> &Path {
        &self.music_dir
    }

    fn is_audio_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.extensions.iter().any(|e| e == &ext)
            })
            .unwrap_or(false)
    }

    /// Audio files directly inside the music directory, in file name order.
    ///
    /// An unreadable directory yields an empty catalog.
    pub fn list_tracks(&self) -> Vec<Track> {
        if !self.music_dir.is_dir() {
            tracing::warn!(dir = %self.music_dir.display(), "music directory is missing");
            return Vec::new();
        }

        let mut tracks: Vec<Track> = Vec::new();
        let walker = WalkDir::new(&self.music_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker.into_iter().filter_map(Result::ok) {
            let path = entry.path();
            if !path.is_file() || !self.is_audio_file(path) {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|s| s.to_str()) else {
                continue;
            };
            let title = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or(file_name)
                .to_string();

            let tags = TrackTags::read(path);
            tracks.push(Track {
                file_name: file_name.to_string(),
                path: path.to_path_buf(),
                title,
                artist: tags.extract_artist(),
                art: tags.extract_embedded_art(),
            });
        }

        tracing::info!(dir = %self.music_dir.display(), count = tracks.len(), "catalog listed");
        tracks
    }
}
