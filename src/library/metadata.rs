//! Tag reading via `lofty`. Every failure here degrades to a default value;
//! a file without tags is a normal outcome.

use std::path::Path;
use std::time::Duration;

use lofty::file::{AudioFile, TaggedFile, TaggedFileExt};
use lofty::picture::PictureType;
use lofty::tag::Accessor;

use super::model::UNKNOWN_ARTIST;

/// The tags of one file, parsed once and queried for each field.
pub struct TrackTags {
    tagged: Option<TaggedFile>,
}

impl TrackTags {
    pub fn read(path: &Path) -> Self {
        let tagged = match lofty::read_from_path(path) {
            Ok(tagged) => Some(tagged),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "no readable tags");
                None
            }
        };
        Self { tagged }
    }

    /// Artist tag, or `"Unknown Artist"`.
    pub fn extract_artist(&self) -> String {
        self.tagged
            .as_ref()
            .and_then(artist_of)
            .unwrap_or_else(|| UNKNOWN_ARTIST.to_string())
    }

    /// Embedded cover art: the front cover, else the first picture.
    pub fn extract_embedded_art(&self) -> Option<Vec<u8>> {
        self.tagged.as_ref().and_then(art_of)
    }

    fn duration(&self) -> Option<Duration> {
        self.tagged
            .as_ref()
            .map(|tagged| tagged.properties().duration())
            .filter(|d| !d.is_zero())
    }
}

/// Stream duration as reported by the container, when the decoder cannot tell.
pub fn probe_duration(path: &Path) -> Option<Duration> {
    TrackTags::read(path).duration()
}

fn artist_of(tagged: &TaggedFile) -> Option<String> {
    let tag = tagged.primary_tag().or_else(|| tagged.first_tag())?;
    let artist = tag.artist()?;
    let artist = artist.trim();
    if artist.is_empty() {
        None
    } else {
        Some(artist.to_string())
    }
}

fn art_of(tagged: &TaggedFile) -> Option<Vec<u8>> {
    let tag = tagged.primary_tag().or_else(|| tagged.first_tag())?;
    let pictures = tag.pictures();
    pictures
        .iter()
        .find(|p| p.pic_type() == PictureType::CoverFront)
        .or_else(|| pictures.first())
        .map(|p| p.data().to_vec())
        .filter(|data| !data.is_empty())
}
