use log::debug;

use crate::clients::{
    PlaylistSource,
    entities::{RawArtist, RawTrack},
    errors::{Error, Result},
};
use crate::duration::format_millis;
use crate::model::{Playlist, Track, TrackSummary};

const ARTIST_SEPARATOR: &str = " & ";

/// Fetches the tracks of one playlist and flattens them into [`Track`] rows.
pub struct TrackAggregator<'a, S: PlaylistSource> {
    source: &'a S,
}

impl<'a, S: PlaylistSource> TrackAggregator<'a, S> {
    pub fn new(source: &'a S) -> Self {
        TrackAggregator { source }
    }

    pub async fn aggregate(&self, playlist: &Playlist) -> Result<TrackSummary> {
        let response = self.source.playlist_tracks(&playlist.uri).await?;
        debug!(
            "Fetched {} items for playlist {}",
            response.items.len(),
            playlist.name
        );

        if response.total != response.items.len() {
            return Err(Error::TrackCountMismatch {
                playlist: playlist.name.clone(),
                reported: response.total,
                returned: response.items.len(),
            });
        }
        if response.items.is_empty() {
            return Err(Error::EmptyPlaylist(playlist.name.clone()));
        }

        // Summed from the raw milliseconds, before formatting drops precision
        let runtime = response.items.iter().map(|i| i.track.duration_ms).sum();
        let tracks = response
            .items
            .into_iter()
            .map(|item| to_track(item.track, &playlist.name))
            .collect();

        Ok(TrackSummary {
            total: response.total,
            runtime,
            tracks,
        })
    }
}

fn to_track(raw: RawTrack, playlist: &str) -> Track {
    Track {
        artists: join_artists(&raw.artists),
        year: raw.album.release_date.chars().take(4).collect(),
        length: format_millis(raw.duration_ms),
        name: raw.name,
        album: raw.album.name,
        playlist: playlist.to_string(),
    }
}

/// Artist names in credit order, joined by " & ".
pub fn join_artists(artists: &[RawArtist]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(ARTIST_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::entities::{PlaylistTracks, RawPlaylist};
    use async_trait::async_trait;

    struct Tracks(serde_json::Value);

    #[async_trait]
    impl PlaylistSource for Tracks {
        async fn current_user_playlists(&self) -> Result<Vec<RawPlaylist>> {
            Ok(vec![])
        }

        async fn playlist_tracks(&self, _uri: &str) -> Result<PlaylistTracks> {
            serde_json::from_value(self.0.clone()).map_err(|e| Error::ParseError(e.to_string()))
        }
    }

    fn artist(name: &str) -> RawArtist {
        RawArtist {
            name: name.to_string(),
        }
    }

    #[test]
    fn joins_artists_without_stray_separators() {
        assert_eq!(join_artists(&[]), "");
        assert_eq!(join_artists(&[artist("Björk")]), "Björk");
        assert_eq!(
            join_artists(&[artist("Simon"), artist("Garfunkel"), artist("Friends")]),
            "Simon & Garfunkel & Friends"
        );
    }

    #[tokio::test]
    async fn builds_tracks_and_totals() {
        let source = Tracks(serde_json::json!({
            "total": 2,
            "href": "ignored",
            "items": [
                {
                    "added_at": "2022-04-01T00:00:00Z",
                    "track": {
                        "name": "Song, Part 1",
                        "duration_ms": 215_000,
                        "artists": [{"name": "A"}, {"name": "B"}],
                        "album": {"name": "Record", "release_date": "2019-06-14"}
                    }
                },
                {
                    "track": {
                        "name": "Interlude",
                        "duration_ms": 59_500,
                        "artists": [{"name": "C"}],
                        "album": {"name": "Other", "release_date": "1999"}
                    }
                }
            ]
        }));
        let playlist = Playlist::new("04/22", "spotify:playlist:x");

        let summary = TrackAggregator::new(&source)
            .aggregate(&playlist)
            .await
            .unwrap();

        assert_eq!(summary.total, 2);
        assert_eq!(summary.total, summary.tracks.len());
        assert_eq!(summary.runtime, 274_500);
        assert_eq!(
            summary.tracks[0],
            Track {
                name: "Song, Part 1".into(),
                artists: "A & B".into(),
                album: "Record".into(),
                year: "2019".into(),
                length: "03:35".into(),
                playlist: "04/22".into(),
            }
        );
        assert_eq!(summary.tracks[1].year, "1999");
        assert_eq!(summary.tracks[1].length, "01:00");
    }

    #[tokio::test]
    async fn empty_playlist_is_an_error() {
        let source = Tracks(serde_json::json!({"total": 0, "items": []}));
        let playlist = Playlist::new("05/22", "spotify:playlist:y");

        let err = TrackAggregator::new(&source)
            .aggregate(&playlist)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::EmptyPlaylist(name) if name == "05/22"));
    }

    #[tokio::test]
    async fn reported_total_must_match_items() {
        let source = Tracks(serde_json::json!({
            "total": 3,
            "items": [{
                "track": {
                    "name": "Only",
                    "duration_ms": 1000,
                    "artists": [{"name": "A"}],
                    "album": {"name": "R", "release_date": "2020"}
                }
            }]
        }));
        let playlist = Playlist::new("06/22", "spotify:playlist:z");

        let err = TrackAggregator::new(&source)
            .aggregate(&playlist)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::TrackCountMismatch {
                reported: 3,
                returned: 1,
                ..
            }
        ));
    }
}
