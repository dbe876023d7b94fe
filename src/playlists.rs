use log::debug;
use regex::Regex;

use crate::clients::{
    PlaylistSource,
    entities::RawPlaylist,
    errors::{Error, Result},
};
use crate::model::Playlist;

/// Matches the `MM/YY` token that marks a monthly playlist, e.g. "Jams 04/22".
const MONTHLY_PATTERN: &str = r"\d\d/\d\d";

/// Selects the monthly playlists of the current user.
pub struct PlaylistFilter<'a, S: PlaylistSource> {
    source: &'a S,
    pattern: Regex,
}

impl<'a, S: PlaylistSource> PlaylistFilter<'a, S> {
    pub fn new(source: &'a S) -> Result<Self> {
        Ok(PlaylistFilter {
            source,
            pattern: Regex::new(MONTHLY_PATTERN)?,
        })
    }

    pub fn is_monthly(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }

    /// Keep only monthly playlists, reduced to name and uri.
    pub fn select(&self, raw: Vec<RawPlaylist>) -> Vec<Playlist> {
        raw.into_iter()
            .filter(|p| self.is_monthly(&p.name))
            .map(|p| Playlist::new(p.name, p.uri))
            .collect()
    }

    pub async fn monthly_playlists(&self) -> Result<Vec<Playlist>> {
        let raw = self.source.current_user_playlists().await?;
        debug!("Fetched {} playlists", raw.len());
        Ok(self.select(raw))
    }
}

/// Sort key of a playlist name: everything from the fourth character on,
/// then the first two characters.
///
/// For "MM/YY" names this compares "YY" and then "MM". Anything after the
/// date token is part of the primary key too, so "01/22 A" keys as
/// ("22 A", "01"). Names shorter than five characters are rejected.
pub fn sort_key(name: &str) -> Result<(String, String)> {
    if name.chars().count() < 5 {
        return Err(Error::MalformedPlaylistName(name.to_string()));
    }
    let rest = name.chars().skip(3).collect();
    let head = name.chars().take(2).collect();
    Ok((rest, head))
}

/// Stable sort by [`sort_key`]. Fails on the first malformed name.
pub fn sort_playlists(playlists: Vec<Playlist>) -> Result<Vec<Playlist>> {
    let mut keyed = playlists
        .into_iter()
        .map(|p| sort_key(&p.name).map(|key| (key, p)))
        .collect::<Result<Vec<_>>>()?;
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(keyed.into_iter().map(|(_, p)| p).collect())
}
