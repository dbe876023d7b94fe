use std::path::PathBuf;

use log::{debug, info};

use crate::aggregator::TrackAggregator;
use crate::clients::{
    PlaylistSource,
    errors::{Error, Result},
};
use crate::model::Playlist;
use crate::playlists::{PlaylistFilter, sort_playlists};
use crate::report;

// Configuration for the Exporter struct
pub struct Config<S: PlaylistSource> {
    pub source: S,
    pub output_dir: PathBuf,
}

pub struct ConfigBuilder<S: PlaylistSource> {
    source: Option<S>,
    output_dir: Option<PathBuf>,
}

impl<S: PlaylistSource> Default for ConfigBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PlaylistSource> ConfigBuilder<S> {
    pub fn new() -> Self {
        Self {
            source: None,
            output_dir: None, // Reports land in the current directory by default
        }
    }

    /// An already-authorized playlist source.
    #[must_use]
    pub fn source(mut self, source: S) -> Self {
        self.source = Some(source);
        self
    }

    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn build(self) -> Result<Config<S>> {
        let source = self
            .source
            .ok_or_else(|| Error::Authentication("no authorized playlist source".into()))?;
        Ok(Config {
            source,
            output_dir: self.output_dir.unwrap_or_else(|| PathBuf::from(".")),
        })
    }
}

// Runs filter -> sort -> aggregate -> write, one playlist at a time
pub struct Exporter<S: PlaylistSource> {
    config: Config<S>,
}

impl<S: PlaylistSource> Exporter<S> {
    pub fn new(config: Config<S>) -> Self {
        Exporter { config }
    }

    /// Collect the monthly playlists with their tracks, in sorted order.
    pub async fn collect(&self) -> Result<Vec<Playlist>> {
        let source = &self.config.source;

        debug!("Fetching playlists ...");
        let selected = PlaylistFilter::new(source)?.monthly_playlists().await?;
        info!("Found {} monthly playlists", selected.len());

        let mut playlists = sort_playlists(selected)?;

        let aggregator = TrackAggregator::new(source);
        for playlist in &mut playlists {
            let summary = aggregator.aggregate(playlist).await?;
            debug!(
                "Playlist {}: {} tracks, {} ms",
                playlist.name, summary.total, summary.runtime
            );
            playlist.fill(summary);
        }
        Ok(playlists)
    }

    pub async fn export(&self) -> Result<Vec<Playlist>> {
        info!("Starting export ...");
        let playlists = self.collect().await?;
        report::write_reports(&self.config.output_dir, &playlists).await?;
        info!(
            "Export completed. Wrote {} and {} to {:?}",
            report::TRACKS_FILE,
            report::PLAYLISTS_FILE,
            self.config.output_dir
        );
        Ok(playlists)
    }
}
