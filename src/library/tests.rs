use super::metadata::{TrackTags, probe_duration};
use super::*;
use crate::audio::PlaybackError;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn catalog_in(root: &Path) -> TrackCatalog {
    let music = root.join("Music");
    fs::create_dir_all(&music).unwrap();
    TrackCatalog::with_dirs(music, root.join("cache"), &["mp3".to_string()])
}

#[test]
fn materialize_copies_bytes_into_cache_dir() {
    let dir = tempdir().unwrap();
    let catalog = catalog_in(dir.path());
    fs::write(catalog.music_dir().join("one.mp3"), b"\x49\x44\x33 audio bytes").unwrap();

    let tracks = catalog.list_tracks();
    let copy = catalog.materialize(&tracks[0]).unwrap();

    assert_eq!(copy, dir.path().join("cache").join("one.mp3"));
    assert_eq!(fs::read(&copy).unwrap(), b"\x49\x44\x33 audio bytes");
}

#[test]
fn materialize_replaces_a_previous_copy() {
    let dir = tempdir().unwrap();
    let catalog = catalog_in(dir.path());
    let source = catalog.music_dir().join("one.mp3");
    fs::write(&source, b"a much longer first version of the file").unwrap();

    let tracks = catalog.list_tracks();
    catalog.materialize(&tracks[0]).unwrap();

    fs::write(&source, b"short").unwrap();
    let copy = catalog.materialize(&tracks[0]).unwrap();
    assert_eq!(fs::read(copy).unwrap(), b"short");
}

#[test]
fn materialize_into_the_music_dir_leaves_the_source_intact() {
    let dir = tempdir().unwrap();
    let music = dir.path().join("Music");
    fs::create_dir_all(&music).unwrap();
    fs::write(music.join("one.mp3"), b"precious bytes").unwrap();
    let catalog = TrackCatalog::with_dirs(music.clone(), music.clone(), &["mp3".to_string()]);

    let tracks = catalog.list_tracks();
    let copy = catalog.materialize(&tracks[0]).unwrap();
    assert_eq!(copy, tracks[0].path);
    assert_eq!(fs::read(&copy).unwrap(), b"precious bytes");

    // The same directory reached through a different spelling.
    let dotted = TrackCatalog::with_dirs(music.clone(), music.join("."), &["mp3".to_string()]);
    dotted.materialize(&tracks[0]).unwrap();
    assert_eq!(fs::read(music.join("one.mp3")).unwrap(), b"precious bytes");
    assert_eq!(fs::read_dir(&music).unwrap().count(), 1);
}

#[test]
fn materialize_leaves_no_staging_files_behind() {
    let dir = tempdir().unwrap();
    let catalog = catalog_in(dir.path());
    fs::write(catalog.music_dir().join("one.mp3"), b"bytes").unwrap();

    let tracks = catalog.list_tracks();
    catalog.materialize(&tracks[0]).unwrap();
    catalog.materialize(&tracks[0]).unwrap();

    let names: Vec<_> = fs::read_dir(dir.path().join("cache"))
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("one.mp3")]);
}

#[test]
fn materialize_reports_missing_source() {
    let dir = tempdir().unwrap();
    let catalog = catalog_in(dir.path());
    fs::write(catalog.music_dir().join("gone.mp3"), b"bytes").unwrap();

    let tracks = catalog.list_tracks();
    fs::remove_file(&tracks[0].path).unwrap();

    match catalog.materialize(&tracks[0]) {
        Err(PlaybackError::SourceUnavailable { path, .. }) => assert_eq!(path, tracks[0].path),
        other => panic!("expected SourceUnavailable, got {other:?}"),
    }
}

#[test]
fn metadata_helpers_default_on_untagged_or_missing_files() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("plain.mp3");
    fs::write(&file, b"no tags in here").unwrap();

    let tags = TrackTags::read(&file);
    assert_eq!(tags.extract_artist(), UNKNOWN_ARTIST);
    assert_eq!(tags.extract_embedded_art(), None);

    let missing = TrackTags::read(&dir.path().join("missing.mp3"));
    assert_eq!(missing.extract_artist(), UNKNOWN_ARTIST);
    assert_eq!(missing.extract_embedded_art(), None);
    assert_eq!(probe_duration(&dir.path().join("missing.mp3")), None);
}
