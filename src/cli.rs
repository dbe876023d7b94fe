use std::path::Path;

use clap::{Parser, Subcommand};
use log::info;
use monthly_playlists::clients::{SpotifyClient, errors::Result};
use monthly_playlists::{duplicates, exporter, report};

#[derive(Parser)]
#[command(name = "monthly-playlists")]
#[command(version, about = "Export monthly Spotify playlists to CSV and find duplicate tracks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write MonthlyPlaylistsTracks.csv and MonthlyPlaylists.csv to the current directory
    Export,
    /// Report tracks that appear in more than one playlist of MonthlyPlaylistsTracks.csv
    ScanDuplicates,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Export => export().await,
        Commands::ScanDuplicates => scan_duplicates(),
    }
}

async fn export() -> Result<()> {
    info!("Authorizing Spotify client ...");
    let spotify = SpotifyClient::try_default()?;
    // CLI prompt may be shown here when no cached token exists
    spotify.authorize_client().await?;

    let config = exporter::ConfigBuilder::new().source(spotify).build()?;
    exporter::Exporter::new(config).export().await?;
    Ok(())
}

fn scan_duplicates() -> Result<()> {
    for duplicate in duplicates::scan(Path::new(report::TRACKS_FILE))? {
        println!("{duplicate}");
    }
    Ok(())
}
