//! Monthly playlists - export dated Spotify playlists to CSV reports
//!
//! This library selects the current user's playlists whose names carry an
//! `MM/YY` token, collects their tracks, writes a per-track and a per-playlist
//! CSV report, and scans the per-track report for tracks repeated across
//! playlists.

/// Track fetching and flattening
pub mod aggregator;
/// Client modules for interacting with the streaming service
pub mod clients;
/// Duplicate detection over the track report
pub mod duplicates;
/// Duration formatting
pub mod duration;
/// Export orchestration and its configuration
pub mod exporter;
/// Playlist and track records
pub mod model;
/// Monthly playlist selection and ordering
pub mod playlists;
/// CSV report rendering and writing
pub mod report;
