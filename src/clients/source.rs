use async_trait::async_trait;

use crate::clients::{
    entities::{PlaylistTracks, RawPlaylist},
    errors::Result,
};

/// Port over the music-streaming API used by the exporter.
///
/// Authentication, transport and pagination are the implementor's concern.
/// [`crate::clients::SpotifyClient`] is the production implementation; tests
/// substitute a fake returning canned records.
#[async_trait]
pub trait PlaylistSource: Send + Sync {
    /// All playlists of the authorized user, in API order.
    async fn current_user_playlists(&self) -> Result<Vec<RawPlaylist>>;

    /// Tracks of the playlist identified by `uri`, in playlist order.
    async fn playlist_tracks(&self, uri: &str) -> Result<PlaylistTracks>;
}
