use serde::Deserialize;

// Records as the Web API returns them. Only the fields the export reads are
// kept; anything else in the payload is dropped during deserialization.

#[derive(Debug, Clone, Deserialize)]
pub struct RawPlaylist {
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAlbum {
    pub name: String,
    pub release_date: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTrack {
    pub name: String,
    pub duration_ms: u64,
    pub artists: Vec<RawArtist>,
    pub album: RawAlbum,
}

/// A playlist entry: the track plus playlist-level data (who added it, when).
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTrackItem {
    pub track: RawTrack,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTracks {
    pub total: usize,
    pub items: Vec<PlaylistTrackItem>,
}
