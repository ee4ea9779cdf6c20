// Copyright (c) 2024 The music_selection authors.
//
// Licensed under the MIT License. You may obtain a copy of the License in
// the LICENSE file at the root of this repository.

//! Command line interface.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::debug;

use crate::config::Config;
use crate::library::{MusicLibrary, Playback};
use crate::menu::{Menu, RofiMenu};
use crate::mpd::{MpdClient, MpdConnectionConfig};
use crate::notify::{Notifier, NotifySend};
use crate::selector::{MusicSelector, Outcome};
use crate::Result;

#[derive(Debug, Parser)]
#[command(name = "music_selection", version, about = "Music selection tool")]
pub struct Cli {
    /// Pre-select artist
    #[arg(long, global = true)]
    pub artist: Option<String>,

    /// Pre-select album (requires --artist)
    #[arg(long, global = true, requires = "artist")]
    pub album: Option<String>,

    /// Pre-select song index
    #[arg(long, global = true, default_value_t = 0)]
    pub preselect: usize,

    /// MPD host
    #[arg(long, global = true, env = "MPD_HOST", default_value = "localhost")]
    pub host: String,

    /// MPD port
    #[arg(long, global = true, env = "MPD_PORT", default_value_t = 6600)]
    pub port: u16,

    /// MPD password
    #[arg(long, global = true, env = "MPD_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Quarantine list [default: ~/music/quarantine]
    #[arg(long, global = true, env = "MUSIC_SELECTION_QUARANTINE")]
    pub quarantine_file: Option<PathBuf>,

    /// Seconds to wait for MPD responses (0 waits forever)
    #[arg(long, global = true, default_value_t = 10)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Select artist then album then song
    Artist,
    /// Select album then song
    Album,
    /// Select song from all songs
    Song,
    /// Play a random album without prompts
    Random,
    /// Select album from quarantine list
    Quarantine,
    /// Play a random quarantine album without prompts
    RandomQuarantine,
    /// Show current playlist and jump to selected song
    Playlist,
}

impl Cli {
    pub fn config(&self) -> Result<Config> {
        let mpd = MpdConnectionConfig {
            host: self.host.clone(),
            port: self.port,
            password: self.password.clone(),
            timeout: (self.timeout > 0).then(|| Duration::from_secs(self.timeout)),
        };
        Config::new(mpd, self.quarantine_file.clone())
    }
}

/// Connects to MPD and runs the requested command with rofi and
/// notify-send.
pub fn run(cli: &Cli) -> Result<Outcome> {
    let config = cli.config()?;
    debug!(
        "Using MPD at {}:{}, quarantine list '{}'",
        config.mpd.host,
        config.mpd.port,
        config.quarantine_path.display()
    );

    let client = MpdClient::connect(&config.mpd)?;
    let mut selector = MusicSelector::new(
        client,
        RofiMenu::new(),
        NotifySend::new(config.notification_timeout),
        config.quarantine_path,
    );
    execute(&mut selector, cli)
}

/// Dispatches the command of `cli` on `selector`.
pub fn execute<C, M, N>(selector: &mut MusicSelector<C, M, N>, cli: &Cli) -> Result<Outcome>
where
    C: MusicLibrary + Playback,
    M: Menu,
    N: Notifier,
{
    let preselect = cli.preselect;
    let Some(command) = cli.command else {
        return selector.album_flow(None, preselect);
    };
    match command {
        Commands::Artist => selector.artist_flow(preselect),
        Commands::Album => match (&cli.artist, &cli.album) {
            (Some(artist), Some(album)) => selector.play_from_album(artist, album, preselect),
            (artist, _) => selector.album_flow(artist.as_deref(), preselect),
        },
        Commands::Song => selector.song_flow(preselect),
        Commands::Random => selector.play_random_album(),
        Commands::Quarantine => selector.quarantine_flow(preselect),
        Commands::RandomQuarantine => selector.play_random_quarantine_album(),
        Commands::Playlist => selector.show_playlist(),
    }
}
