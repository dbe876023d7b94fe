/// API-shaped playlist and track records
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// The playlist API port the exporter depends on
pub mod source;
/// Spotify API client
pub mod spotify;

pub use source::PlaylistSource;
pub use spotify::SpotifyClient;
