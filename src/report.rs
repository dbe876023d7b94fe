//! CSV reports of an export run.
//!
//! Quoting is deliberately minimal: a field containing a comma is wrapped in
//! double quotes, nothing else is escaped.

use std::path::Path;

use log::debug;

use crate::clients::errors::{Error, Result};
use crate::duration::{format_millis, format_millis_f64};
use crate::model::{Playlist, Track};

/// Per-track report file name.
pub const TRACKS_FILE: &str = "MonthlyPlaylistsTracks.csv";
/// Per-playlist summary file name.
pub const PLAYLISTS_FILE: &str = "MonthlyPlaylists.csv";

const SUMMARY_HEADER: &str = "name,total,runtime";

pub fn escape_field(text: &str) -> String {
    if text.contains(',') {
        format!("\"{text}\"")
    } else {
        text.to_string()
    }
}

fn track_row(track: &Track) -> String {
    track
        .values()
        .iter()
        .map(|v| escape_field(v))
        .collect::<Vec<_>>()
        .join(",")
}

/// Header from the first track of the first playlist, then one row per
/// track in playlist order.
pub fn render_tracks(playlists: &[Playlist]) -> Result<String> {
    let first = playlists
        .first()
        .ok_or_else(|| Error::EmptyExport("no monthly playlists".into()))?;
    if first.tracks.is_empty() {
        return Err(Error::EmptyExport(format!(
            "first playlist {:?} has no tracks",
            first.name
        )));
    }

    let mut out = Track::FIELDS.join(",");
    out.push('\n');
    for track in playlists.iter().flat_map(|p| &p.tracks) {
        out.push_str(&track_row(track));
        out.push('\n');
    }
    Ok(out)
}

/// One row per playlist followed by an `average` row. The average row has
/// no trailing newline.
#[allow(clippy::cast_precision_loss)]
pub fn render_summary(playlists: &[Playlist]) -> Result<String> {
    if playlists.is_empty() {
        return Err(Error::EmptyExport("no monthly playlists".into()));
    }

    let mut out = String::from(SUMMARY_HEADER);
    out.push('\n');
    for playlist in playlists {
        out.push_str(&format!(
            "{},{},{}\n",
            escape_field(&playlist.name),
            playlist.total,
            format_millis(playlist.runtime)
        ));
    }

    let count = playlists.len() as f64;
    let avg_total = playlists.iter().map(|p| p.total as f64).sum::<f64>() / count;
    let avg_runtime = playlists.iter().map(|p| p.runtime as f64).sum::<f64>() / count;
    out.push_str(&format!(
        "average,{avg_total:.2},{}",
        format_millis_f64(avg_runtime)
    ));
    Ok(out)
}

/// Render both reports, then write them into `dir`. Nothing is written if
/// either report cannot be rendered.
pub async fn write_reports(dir: &Path, playlists: &[Playlist]) -> Result<()> {
    let tracks = render_tracks(playlists)?;
    let summary = render_summary(playlists)?;

    let tracks_path = dir.join(TRACKS_FILE);
    tokio::fs::write(&tracks_path, tracks).await?;
    debug!("Wrote track report to {tracks_path:?}");

    let summary_path = dir.join(PLAYLISTS_FILE);
    tokio::fs::write(&summary_path, summary).await?;
    debug!("Wrote playlist summary to {summary_path:?}");
    Ok(())
}
