use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::path::Path;

use log::{debug, info};

use crate::clients::errors::{Error, Result};
use crate::model::Track;

/// Identity of a track across playlists: exact `"<name> by <artists>"`,
/// case-sensitive, no normalization.
pub fn track_key(track: &Track) -> String {
    format!("{} by {}", track.name, track.artists)
}

/// A track row whose key was already taken by an earlier row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    pub key: String,
    pub track: Track,
    pub first: Track,
}

impl fmt::Display for Duplicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Duplicate: {} on {} matches {} by {} on {}",
            self.key, self.track.playlist, self.first.name, self.first.artists, self.first.playlist
        )
    }
}

/// Key to first-seen track. The first insert for a key wins; later inserts
/// with the same key leave the entry untouched.
#[derive(Debug, Default)]
pub struct DuplicateIndex {
    seen: HashMap<String, Track>,
}

impl DuplicateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `track`, or report it against the canonical track for its key.
    pub fn insert(&mut self, track: Track) -> Option<Duplicate> {
        match self.seen.entry(track_key(&track)) {
            Entry::Occupied(entry) => Some(Duplicate {
                key: entry.key().clone(),
                first: entry.get().clone(),
                track,
            }),
            Entry::Vacant(entry) => {
                entry.insert(track);
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Track> {
        self.seen.get(key)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Duplicates among `tracks`, in input order.
pub fn find_duplicates(tracks: impl IntoIterator<Item = Track>) -> Vec<Duplicate> {
    let mut index = DuplicateIndex::new();
    tracks
        .into_iter()
        .filter_map(|track| index.insert(track))
        .collect()
}

/// Read a track report written by the exporter.
///
/// Columns are located by header name. The report never escapes quote
/// marks, so a row may split into extra fields; those are ignored and
/// missing trailing fields read as empty.
pub fn read_tracks(path: &Path) -> Result<Vec<Track>> {
    let input_error = |source: csv::Error| Error::InputFile {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(input_error)?;

    let headers = reader.headers().map_err(input_error)?.clone();
    let mut columns = [0; 6];
    for (column, field) in columns.iter_mut().zip(Track::FIELDS) {
        *column = headers.iter().position(|h| h == field).ok_or_else(|| {
            input_error(csv::Error::from(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("missing column {field:?}"),
            )))
        })?;
    }

    let mut tracks = Vec::new();
    for record in reader.records() {
        let record = record.map_err(input_error)?;
        let [name, artists, album, year, length, playlist] =
            columns.map(|i| record.get(i).unwrap_or_default().to_string());
        tracks.push(Track {
            name,
            artists,
            album,
            year,
            length,
            playlist,
        });
    }
    debug!("Read {} tracks from {path:?}", tracks.len());
    Ok(tracks)
}

/// Scan the track report at `path` for duplicates.
pub fn scan(path: &Path) -> Result<Vec<Duplicate>> {
    let tracks = read_tracks(path)?;
    let scanned = tracks.len();
    let duplicates = find_duplicates(tracks);
    info!(
        "Scanned {scanned} tracks, found {} duplicates",
        duplicates.len()
    );
    Ok(duplicates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Playlist;
    use crate::report::render_tracks;

    fn track(name: &str, artists: &str, playlist: &str) -> Track {
        Track {
            name: name.into(),
            artists: artists.into(),
            album: "Album".into(),
            year: "2021".into(),
            length: "03:00".into(),
            playlist: playlist.into(),
        }
    }

    #[test]
    fn reports_repeat_against_first_occurrence() {
        let duplicates = find_duplicates([
            track("Song", "A & B", "01/22"),
            track("Other", "C", "01/22"),
            track("Song", "A & B", "02/22"),
        ]);

        assert_eq!(duplicates.len(), 1);
        assert_eq!(
            duplicates[0].to_string(),
            "Duplicate: Song by A & B on 02/22 matches Song by A & B on 01/22"
        );
    }

    #[test]
    fn first_occurrence_stays_canonical() {
        let mut index = DuplicateIndex::new();
        assert!(index.insert(track("Song", "A", "01/22")).is_none());
        assert!(index.insert(track("Song", "A", "02/22")).is_some());
        let third = index.insert(track("Song", "A", "03/22")).unwrap();

        assert_eq!(index.len(), 1);
        assert_eq!(index.get("Song by A").unwrap().playlist, "01/22");
        assert_eq!(third.first.playlist, "01/22");
        assert_eq!(third.track.playlist, "03/22");
    }

    #[test]
    fn keys_are_exact() {
        let duplicates = find_duplicates([
            track("Song", "A", "01/22"),
            track("song", "A", "02/22"),
            track("Song", "A feat. B", "03/22"),
            track("Song ", "A", "04/22"),
        ]);
        assert!(duplicates.is_empty());
    }

    #[test]
    fn reads_quoted_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracks.csv");
        std::fs::write(
            &path,
            "name,artists,album,year,length,playlist\n\
             \"Hello, Goodbye\",The Beatles,Magical Mystery Tour,1967,03:27,01/22\n",
        )
        .unwrap();

        let tracks = read_tracks(&path).unwrap();

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].name, "Hello, Goodbye");
        assert_eq!(tracks[0].playlist, "01/22");
    }

    #[test]
    fn scans_report_with_unescaped_quotes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracks.csv");
        let playlists = vec![
            Playlist {
                name: "01/22".into(),
                uri: "u1".into(),
                total: 2,
                runtime: 2_000,
                tracks: vec![track("Say \"Hi\", there", "A", "01/22"), track("Dup", "B", "01/22")],
            },
            Playlist {
                name: "02/22".into(),
                uri: "u2".into(),
                total: 1,
                runtime: 1_000,
                tracks: vec![track("Dup", "B", "02/22")],
            },
        ];
        std::fs::write(&path, render_tracks(&playlists).unwrap()).unwrap();

        let tracks = read_tracks(&path).unwrap();
        let duplicates = scan(&path).unwrap();

        assert_eq!(tracks.len(), 3);
        assert_eq!(tracks[1].playlist, "01/22");
        assert_eq!(duplicates.len(), 1);
        assert_eq!(
            duplicates[0].to_string(),
            "Duplicate: Dup by B on 02/22 matches Dup by B on 01/22"
        );
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = scan(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, Error::InputFile { .. }));
    }

    #[test]
    fn missing_column_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracks.csv");
        std::fs::write(&path, "name,artists\nSong,A\n").unwrap();

        let err = scan(&path).unwrap_err();

        assert!(matches!(err, Error::InputFile { .. }));
    }
}
