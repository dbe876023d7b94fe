use std::path::PathBuf;

use async_trait::async_trait;
use log::{debug, warn};

use crate::clients::{
    entities::{PlaylistTrackItem, PlaylistTracks, RawAlbum, RawArtist, RawPlaylist, RawTrack},
    errors::{Error, Result},
    source::PlaylistSource,
};
use futures::stream::TryStreamExt;
use rspotify::{
    AuthCodeSpotify, Config, Credentials, OAuth,
    model::{FullTrack, PlayableItem, PlaylistId, SimplifiedPlaylist},
    prelude::*,
    scopes,
};

impl From<SimplifiedPlaylist> for RawPlaylist {
    fn from(p: SimplifiedPlaylist) -> RawPlaylist {
        RawPlaylist {
            uri: p.id.uri(),
            name: p.name,
        }
    }
}

impl TryFrom<FullTrack> for RawTrack {
    type Error = Error;

    fn try_from(t: FullTrack) -> Result<RawTrack> {
        let duration_ms = u64::try_from(t.duration.num_milliseconds()).map_err(|_| {
            Error::ParseError(format!("negative duration for track {:?}", t.name))
        })?;
        Ok(RawTrack {
            name: t.name,
            duration_ms,
            artists: t
                .artists
                .into_iter()
                .map(|a| RawArtist { name: a.name })
                .collect(),
            album: RawAlbum {
                name: t.album.name,
                release_date: t.album.release_date.unwrap_or_default(),
            },
        })
    }
}

pub struct SpotifyClient {
    pub spotify: AuthCodeSpotify,
}

impl SpotifyClient {
    // Authorize the Spotify client via CLI prompt and OAuth flow.
    // A cached token skips the prompt.
    pub async fn authorize_client(&self) -> Result<()> {
        debug!("Starting Spotify authorization ...");
        let url = self
            .spotify
            .get_authorize_url(false)
            .map_err(|e| Error::Authentication(e.to_string()))?;
        self.spotify
            .prompt_for_token(&url)
            .await
            .map_err(|e| Error::Authentication(e.to_string()))?;
        let user = self
            .spotify
            .me()
            .await
            .map_err(|e| Error::Authentication(e.to_string()))?;
        debug!("Authenticated as user: {:?}", user.display_name);
        Ok(())
    }

    // Create a SpotifyClient from environment variables or fail with an authentication error
    pub fn try_default() -> Result<Self> {
        let creds = Credentials::from_env().ok_or_else(|| {
            Error::Authentication(
                "missing RSPOTIFY_CLIENT_ID / RSPOTIFY_CLIENT_SECRET in environment".into(),
            )
        })?;
        let oauth = OAuth::from_env(scopes!("playlist-read-private")).ok_or_else(|| {
            Error::Authentication("missing RSPOTIFY_REDIRECT_URI in environment".into())
        })?;

        let cache_path = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp")) // Fallback to /tmp if cache directory can't be determined
            .join(".monthly_playlists_token_cache");

        let spotify = AuthCodeSpotify::with_config(
            creds,
            oauth,
            Config {
                token_cached: true,
                cache_path,
                ..Default::default()
            },
        );

        Ok(Self { spotify })
    }
}

#[async_trait]
impl PlaylistSource for SpotifyClient {
    async fn current_user_playlists(&self) -> Result<Vec<RawPlaylist>> {
        let stream = self.spotify.current_user_playlists();
        let playlists: Vec<RawPlaylist> = stream.map_ok(RawPlaylist::from).try_collect().await?;
        Ok(playlists)
    }

    async fn playlist_tracks(&self, uri: &str) -> Result<PlaylistTracks> {
        let playlist_id = PlaylistId::from_uri(uri)?;
        let entries: Vec<_> = self
            .spotify
            .playlist_items(playlist_id, None, None)
            .try_collect()
            .await?;

        let mut items = Vec::with_capacity(entries.len());
        for entry in entries {
            match entry.track {
                Some(PlayableItem::Track(track)) => items.push(PlaylistTrackItem {
                    track: RawTrack::try_from(track)?,
                }),
                Some(_) => warn!("Skipping non-track item in {uri}"),
                None => warn!("Skipping unavailable item in {uri}"),
            }
        }

        // The API's own total counts episodes and unavailable entries too,
        // so report what was kept instead.
        Ok(PlaylistTracks {
            total: items.len(),
            items,
        })
    }
}
