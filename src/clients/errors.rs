use std::path::PathBuf;

use rspotify::ClientError;
use rspotify::model::IdError;
use thiserror::Error;

/// Everything that can end an export or a duplicate scan.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Spotify authentication failed: {0}")]
    Authentication(String),

    #[error("Playlist name {0:?} is too short to derive a sort key")]
    MalformedPlaylistName(String),

    #[error("Playlist {0:?} has no tracks")]
    EmptyPlaylist(String),

    #[error("Nothing to export: {0}")]
    EmptyExport(String),

    #[error("Failed to read {path:?}: {source}")]
    InputFile {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Playlist {playlist:?} reported {reported} tracks but returned {returned}")]
    TrackCountMismatch {
        playlist: String,
        reported: usize,
        returned: usize,
    },

    #[error("Failed to parse API data, error: {0}")]
    ParseError(String),

    #[error("Spotify error: {0}")]
    SpotifyError(#[from] ClientError),

    #[error("Invalid Spotify id: {0}")]
    InvalidId(#[from] IdError),

    #[error("Invalid playlist pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
