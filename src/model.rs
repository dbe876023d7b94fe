/// One exported track. `playlist` repeats the owning playlist's name so every
/// row of the track report stands on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub artists: String,
    pub album: String,
    pub year: String,
    pub length: String,
    pub playlist: String,
}

impl Track {
    /// Column names of the track report, in row order.
    pub const FIELDS: [&'static str; 6] = ["name", "artists", "album", "year", "length", "playlist"];

    /// Field values in the same order as [`Track::FIELDS`].
    pub fn values(&self) -> [&str; 6] {
        [
            &self.name,
            &self.artists,
            &self.album,
            &self.year,
            &self.length,
            &self.playlist,
        ]
    }
}

/// A monthly playlist. `total`, `runtime` (milliseconds) and `tracks` stay
/// empty until [`Playlist::fill`] is called with the aggregated tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub name: String,
    pub uri: String,
    pub total: usize,
    pub runtime: u64,
    pub tracks: Vec<Track>,
}

/// Output of [`crate::aggregator::TrackAggregator`] for one playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackSummary {
    pub total: usize,
    pub runtime: u64,
    pub tracks: Vec<Track>,
}

impl Playlist {
    pub fn new(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Playlist {
            name: name.into(),
            uri: uri.into(),
            total: 0,
            runtime: 0,
            tracks: Vec::new(),
        }
    }

    pub fn fill(&mut self, summary: TrackSummary) {
        self.total = summary.total;
        self.runtime = summary.runtime;
        self.tracks = summary.tracks;
    }
}
