// Copyright (c) 2024 The music_selection authors.
//
// Licensed under the MIT License. You may obtain a copy of the License in
// the LICENSE file at the root of this repository.

use std::fmt::Display;
use std::path::PathBuf;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::library::{MusicLibrary, Playback};
use crate::menu::{Action, Menu, Selection};
use crate::models::{Album, Song, Tag};
use crate::notify::{self, Notifier};
use crate::{quarantine, Result};

const UNKNOWN_ARTIST: &str = "Unknown Artist";
const UNKNOWN_ALBUM: &str = "Unknown Album";
const UNKNOWN_TITLE: &str = "Unknown Title";

/// Result of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice<T> {
    Chosen(T, Action),
    Cancelled,
    /// There was nothing to choose from.
    Empty,
}

/// Lists that can turn out empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Artists,
    Albums,
    Songs,
    QuarantineAlbums,
    Playlist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumSource {
    Library,
    Quarantine,
}

/// What a command ended up doing. Displayed to the user on stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Playing {
        artist: String,
        album: String,
        title: String,
    },
    Queued {
        artist: String,
        album: String,
        title: String,
    },
    SongNotFound {
        title: String,
    },
    PlayingRandomAlbum {
        album: Album,
        source: AlbumSource,
    },
    QueuedAlbum(Album),
    NothingFound(Listing),
    Cancelled,
}

impl<T> Choice<T> {
    /// Outcome of a prompt that did not end with a choice.
    fn unchosen(&self, listing: Listing) -> Outcome {
        match self {
            Choice::Empty => Outcome::NothingFound(listing),
            _ => Outcome::Cancelled,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Playing {
                artist,
                album,
                title,
            } => write!(f, "Playing:\n{artist}\n{album}\n{title}"),
            Outcome::Queued {
                artist,
                album,
                title,
            } => write!(f, "Queued:\n{artist}\n{album}\n{title}"),
            Outcome::SongNotFound { title } => {
                write!(f, "Could not find song '{title}' in playlist")
            }
            Outcome::PlayingRandomAlbum { album, source } => {
                let what = match source {
                    AlbumSource::Library => "album",
                    AlbumSource::Quarantine => "quarantine album",
                };
                write!(f, "Playing random {what}:\n{}\n{}", album.artist, album.album)
            }
            Outcome::QueuedAlbum(album) => {
                write!(f, "Queued album:\n{}\n{}", album.artist, album.album)
            }
            Outcome::NothingFound(listing) => match listing {
                Listing::Artists => write!(f, "No artists found"),
                Listing::Albums => write!(f, "No albums found"),
                Listing::Songs => write!(f, "No songs found"),
                Listing::QuarantineAlbums => write!(f, "No quarantine albums found"),
                Listing::Playlist => write!(f, "Playlist is empty"),
            },
            Outcome::Cancelled => Ok(()),
        }
    }
}

fn or_unknown<'a>(value: &'a str, unknown: &'a str) -> &'a str {
    if value.is_empty() {
        unknown
    } else {
        value
    }
}

/// Drives the prompts and the player.
#[derive(Debug)]
pub struct MusicSelector<C, M, N> {
    client: C,
    menu: M,
    notifier: N,
    quarantine_path: PathBuf,
    rng: StdRng,
}

impl<C, M, N> MusicSelector<C, M, N>
where
    C: MusicLibrary + Playback,
    M: Menu,
    N: Notifier,
{
    pub fn new(client: C, menu: M, notifier: N, quarantine_path: PathBuf) -> Self {
        Self {
            client,
            menu,
            notifier,
            quarantine_path,
            rng: StdRng::from_entropy(),
        }
    }

    /// Replaces the random source used for shuffling and random picks.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn menu(&self) -> &M {
        &self.menu
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    fn prompt<T: Clone>(
        &self,
        choices: &[T],
        items: &[String],
        prompt: &str,
        selected_row: usize,
        columns: bool,
    ) -> Result<Choice<T>> {
        match self.menu.select(items, prompt, selected_row, columns)? {
            Selection::Chosen { index, action } => match choices.get(index) {
                Some(choice) => Ok(Choice::Chosen(choice.clone(), action)),
                None => Ok(Choice::Cancelled),
            },
            Selection::Cancelled => Ok(Choice::Cancelled),
        }
    }

    pub fn select_artist(&mut self) -> Result<Choice<String>> {
        let mut artists = self.client.artists()?;
        if artists.is_empty() {
            return Ok(Choice::Empty);
        }
        artists.shuffle(&mut self.rng);
        self.prompt(&artists, &artists, "Artist:", 0, false)
    }

    /// Albums of `artist` (names only) or of the whole library (artist and
    /// name in columns), shuffled.
    pub fn select_album(&mut self, artist: Option<&str>) -> Result<Choice<Album>> {
        let mut albums = self.client.albums(artist)?;
        if albums.is_empty() {
            return Ok(Choice::Empty);
        }
        albums.shuffle(&mut self.rng);

        let (items, columns): (Vec<String>, bool) = match artist {
            Some(_) => (albums.iter().map(|a| a.album.clone()).collect(), false),
            None => (
                albums
                    .iter()
                    .map(|a| format!("{}\t{}", a.artist, a.album))
                    .collect(),
                true,
            ),
        };
        self.prompt(&albums, &items, "Album:", 0, columns)
    }

    /// Songs of one album in server order, or every song shuffled.
    pub fn select_song(
        &mut self,
        artist: Option<&str>,
        album: Option<&str>,
        preselect: usize,
    ) -> Result<Choice<Song>> {
        let mut songs: Vec<Song> = self
            .client
            .songs(artist, album)?
            .into_iter()
            .filter(|s| !s.title.is_empty())
            .collect();
        if songs.is_empty() {
            return Ok(Choice::Empty);
        }

        let whole_library = !(artist.is_some() && album.is_some());
        let items: Vec<String> = if whole_library {
            songs.shuffle(&mut self.rng);
            songs
                .iter()
                .map(|s| format!("{}\t{}", s.artist, s.title))
                .collect()
        } else {
            songs.iter().map(|s| s.title.clone()).collect()
        };
        self.prompt(&songs, &items, "Choose a song:", preselect, whole_library)
    }

    /// Plays `song` within its album, or queues just that song.
    ///
    /// The album is looked up by artist and title when the song has none.
    pub fn play_song(&mut self, song: &Song, action: Action) -> Result<Outcome> {
        let album = if song.album.is_empty() {
            self.client.song_album(&song.artist, &song.title)?
        } else {
            Some(song.album.clone())
        };

        match action {
            Action::Play => {
                self.client.clear()?;
                let mut filters = Vec::with_capacity(2);
                if let Some(album) = &album {
                    filters.push((Tag::Album, album.as_str()));
                }
                filters.push((Tag::AlbumArtist, song.artist.as_str()));
                self.client.find_add(&filters)?;

                let playlist = self.client.playlist()?;
                match playlist.iter().position(|s| s.title == song.title) {
                    Some(position) => {
                        self.client.play(Some(position))?;
                        Ok(Outcome::Playing {
                            artist: song.artist.clone(),
                            album: album.unwrap_or_default(),
                            title: song.title.clone(),
                        })
                    }
                    None => {
                        debug!("'{}' not in the new playlist", song.title);
                        self.client.play(None)?;
                        Ok(Outcome::SongNotFound {
                            title: song.title.clone(),
                        })
                    }
                }
            }
            Action::Queue => {
                let mut filters = vec![(Tag::AlbumArtist, song.artist.as_str())];
                if let Some(album) = &album {
                    filters.push((Tag::Album, album.as_str()));
                }
                filters.push((Tag::Title, song.title.as_str()));
                self.client.find_add(&filters)?;
                Ok(Outcome::Queued {
                    artist: song.artist.clone(),
                    album: album.unwrap_or_default(),
                    title: song.title.clone(),
                })
            }
        }
    }

    pub fn queue_album(&mut self, album: &Album) -> Result<Outcome> {
        self.client.find_add(&[
            (Tag::Album, album.album.as_str()),
            (Tag::AlbumArtist, album.artist.as_str()),
        ])?;
        Ok(Outcome::QueuedAlbum(album.clone()))
    }

    /// Replaces the playlist with `album` and starts playing it.
    pub fn play_album(&mut self, album: &Album) -> Result<()> {
        self.client.clear()?;
        self.client.find_add(&[
            (Tag::Album, album.album.as_str()),
            (Tag::AlbumArtist, album.artist.as_str()),
        ])?;
        self.client.play(None)?;
        self.notifier.notify(
            notify::SUMMARY_NOW_PLAYING_ALBUM,
            &notify::album_body(&album.artist, &album.album),
        );
        Ok(())
    }

    pub fn play_random_album(&mut self) -> Result<Outcome> {
        let albums = self.client.albums(None)?;
        let Some(album) = albums.choose(&mut self.rng).cloned() else {
            return Ok(Outcome::NothingFound(Listing::Albums));
        };
        self.play_album(&album)?;
        Ok(Outcome::PlayingRandomAlbum {
            album,
            source: AlbumSource::Library,
        })
    }

    /// Picks an album of the quarantine list, at random or through the menu.
    pub fn select_quarantine_album(&mut self, random: bool) -> Result<Choice<Album>> {
        let albums = quarantine::load(&self.quarantine_path)?;
        if albums.is_empty() {
            return Ok(Choice::Empty);
        }

        if random {
            return Ok(match albums.choose(&mut self.rng) {
                Some(album) => Choice::Chosen(album.clone(), Action::Play),
                None => Choice::Empty,
            });
        }

        let items: Vec<String> = albums
            .iter()
            .map(|a| format!("{}\t{}", a.artist, a.album))
            .collect();
        self.prompt(&albums, &items, "Quarantine Album:", 0, true)
    }

    pub fn play_random_quarantine_album(&mut self) -> Result<Outcome> {
        let album = match self.select_quarantine_album(true)? {
            Choice::Chosen(album, _) => album,
            other => return Ok(other.unchosen(Listing::QuarantineAlbums)),
        };
        self.play_album(&album)?;
        Ok(Outcome::PlayingRandomAlbum {
            album,
            source: AlbumSource::Quarantine,
        })
    }

    /// Shows the current playlist with the current song preselected and
    /// jumps to the chosen entry.
    pub fn show_playlist(&mut self) -> Result<Outcome> {
        let playlist = self.client.playlist()?;
        if playlist.is_empty() {
            return Ok(Outcome::NothingFound(Listing::Playlist));
        }
        let current = self.client.status()?.song_position().unwrap_or(0);

        let items: Vec<String> = playlist
            .iter()
            .map(|song| {
                let title = or_unknown(&song.title, UNKNOWN_TITLE);
                let title = match song.track_label() {
                    Some(track) => format!("{track} {title}"),
                    None => title.to_string(),
                };
                format!("{}\t{title}", or_unknown(&song.artist, UNKNOWN_ARTIST))
            })
            .collect();

        let Selection::Chosen { index, .. } =
            self.menu.select(&items, "Playlist:", current, true)?
        else {
            return Ok(Outcome::Cancelled);
        };
        let Some(song) = playlist.get(index) else {
            return Ok(Outcome::Cancelled);
        };

        self.client.play(Some(index))?;
        let artist = or_unknown(&song.artist, UNKNOWN_ARTIST);
        let album = or_unknown(&song.album, UNKNOWN_ALBUM);
        let title = or_unknown(&song.title, UNKNOWN_TITLE);
        self.notifier.notify(
            notify::SUMMARY_NOW_PLAYING,
            &notify::song_body(artist, album, title),
        );
        Ok(Outcome::Playing {
            artist: artist.to_string(),
            album: album.to_string(),
            title: title.to_string(),
        })
    }

    /// After an album was chosen: queue it whole, or pick one of its songs
    /// and play it.
    pub fn continue_with_album(
        &mut self,
        album: &Album,
        action: Action,
        preselect: usize,
    ) -> Result<Outcome> {
        if action == Action::Queue {
            return self.queue_album(album);
        }
        self.play_from_album(&album.artist, &album.album, preselect)
    }

    /// Song prompt for one album followed by [`Self::play_song`].
    pub fn play_from_album(
        &mut self,
        artist: &str,
        album: &str,
        preselect: usize,
    ) -> Result<Outcome> {
        match self.select_song(Some(artist), Some(album), preselect)? {
            Choice::Chosen(song, action) => self.play_song(&song, action),
            other => Ok(other.unchosen(Listing::Songs)),
        }
    }

    /// Artist, then album, then song.
    pub fn artist_flow(&mut self, preselect: usize) -> Result<Outcome> {
        let artist = match self.select_artist()? {
            Choice::Chosen(artist, _) => artist,
            other => return Ok(other.unchosen(Listing::Artists)),
        };
        self.album_flow(Some(&artist), preselect)
    }

    /// Album (optionally of one artist), then song.
    pub fn album_flow(&mut self, artist: Option<&str>, preselect: usize) -> Result<Outcome> {
        match self.select_album(artist)? {
            Choice::Chosen(album, action) => self.continue_with_album(&album, action, preselect),
            other => Ok(other.unchosen(Listing::Albums)),
        }
    }

    /// Any song of the library.
    pub fn song_flow(&mut self, preselect: usize) -> Result<Outcome> {
        match self.select_song(None, None, preselect)? {
            Choice::Chosen(song, action) => self.play_song(&song, action),
            other => Ok(other.unchosen(Listing::Songs)),
        }
    }

    /// Quarantine album, then song.
    pub fn quarantine_flow(&mut self, preselect: usize) -> Result<Outcome> {
        match self.select_quarantine_album(false)? {
            Choice::Chosen(album, action) => self.continue_with_album(&album, action, preselect),
            other => Ok(other.unchosen(Listing::QuarantineAlbums)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;
    use crate::test_utils::{song, InMemoryLibrary, RecordingNotifier, ScriptedMenu};
    use rstest::{fixture, rstest};
    use std::collections::HashMap;

    type TestSelector = MusicSelector<InMemoryLibrary, ScriptedMenu, RecordingNotifier>;

    fn play(index: usize) -> Selection {
        Selection::Chosen {
            index,
            action: Action::Play,
        }
    }

    fn queue(index: usize) -> Selection {
        Selection::Chosen {
            index,
            action: Action::Queue,
        }
    }

    #[fixture]
    fn library() -> InMemoryLibrary {
        InMemoryLibrary::new(vec![
            song("Queen", "Jazz", "Mustapha", Some("1/13")),
            song("Queen", "Jazz", "Fat Bottomed Girls", Some("2/13")),
            song("Queen", "Innuendo", "Innuendo", Some("1")),
            song("Rush", "2112", "2112", Some("1")),
            song("Rush", "2112", "A Passage to Bangkok", Some("2")),
        ])
    }

    fn selector(library: InMemoryLibrary, answers: Vec<Selection>) -> TestSelector {
        MusicSelector::new(
            library,
            ScriptedMenu::new(answers),
            RecordingNotifier::default(),
            PathBuf::from("/nonexistent/quarantine"),
        )
        .with_rng(StdRng::seed_from_u64(7))
    }

    #[rstest]
    fn test_select_song_of_album_keeps_order(library: InMemoryLibrary) {
        let mut selector = selector(library, vec![play(1)]);
        let choice = selector.select_song(Some("Queen"), Some("Jazz"), 1).unwrap();

        assert_eq!(
            choice,
            Choice::Chosen(
                song("Queen", "Jazz", "Fat Bottomed Girls", Some("2/13")),
                Action::Play
            )
        );
        let calls = selector.menu().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].items, vec!["Mustapha", "Fat Bottomed Girls"]);
        assert_eq!(calls[0].prompt, "Choose a song:");
        assert_eq!(calls[0].selected_row, 1);
        assert!(!calls[0].columns);
    }

    #[rstest]
    fn test_select_song_whole_library_in_columns(library: InMemoryLibrary) {
        let mut selector = selector(library, vec![play(0)]);
        let choice = selector.select_song(None, None, 0).unwrap();

        let calls = selector.menu().calls();
        assert!(calls[0].columns);
        assert_eq!(calls[0].items.len(), 5);
        assert!(calls[0].items.iter().all(|i| i.contains('\t')));

        // The chosen song is the one displayed at the chosen row.
        let Choice::Chosen(chosen, Action::Play) = choice else {
            panic!("expected a song");
        };
        assert_eq!(calls[0].items[0], format!("{}\t{}", chosen.artist, chosen.title));
    }

    #[rstest]
    fn test_select_album_of_artist_shows_names(library: InMemoryLibrary) {
        let mut selector = selector(library, vec![queue(0)]);
        let choice = selector.select_album(Some("Queen")).unwrap();

        let calls = selector.menu().calls();
        let mut items = calls[0].items.clone();
        items.sort();
        assert_eq!(items, vec!["Innuendo", "Jazz"]);
        assert!(!calls[0].columns);
        assert_eq!(
            choice,
            Choice::Chosen(Album::new("Queen", calls[0].items[0].as_str()), Action::Queue)
        );
    }

    #[rstest]
    fn test_play_song_plays_position_in_album(library: InMemoryLibrary) {
        let mut selector = selector(library, vec![]);
        let outcome = selector
            .play_song(&song("Queen", "Jazz", "Fat Bottomed Girls", None), Action::Play)
            .unwrap();

        assert_eq!(
            outcome,
            Outcome::Playing {
                artist: "Queen".into(),
                album: "Jazz".into(),
                title: "Fat Bottomed Girls".into(),
            }
        );
        assert_eq!(
            selector.client().commands,
            vec![
                "clear",
                "findadd album \"Jazz\" albumartist \"Queen\"",
                "play 1",
            ]
        );
    }

    #[rstest]
    fn test_play_song_looks_up_missing_album(library: InMemoryLibrary) {
        let mut selector = selector(library, vec![]);
        let outcome = selector
            .play_song(&song("Rush", "", "A Passage to Bangkok", None), Action::Queue)
            .unwrap();

        assert_eq!(
            outcome.to_string(),
            "Queued:\nRush\n2112\nA Passage to Bangkok"
        );
        assert_eq!(
            selector.client().commands,
            vec!["findadd albumartist \"Rush\" album \"2112\" title \"A Passage to Bangkok\""]
        );
    }

    #[rstest]
    fn test_play_song_not_in_playlist(library: InMemoryLibrary) {
        let mut selector = selector(library, vec![]);
        let outcome = selector
            .play_song(&song("Queen", "Jazz", "Bohemian Rhapsody", None), Action::Play)
            .unwrap();

        assert_eq!(
            outcome.to_string(),
            "Could not find song 'Bohemian Rhapsody' in playlist"
        );
        assert_eq!(selector.client().commands.last().unwrap(), "play");
    }

    #[rstest]
    fn test_artist_flow(library: InMemoryLibrary) {
        // Artist prompt, album prompt, song prompt.
        let mut selector = selector(library, vec![play(0), play(0), play(0)]);
        let outcome = selector.artist_flow(0).unwrap();

        let calls = selector.menu().calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].prompt, "Artist:");
        assert_eq!(calls[1].prompt, "Album:");
        assert_eq!(calls[2].prompt, "Choose a song:");

        let Outcome::Playing {
            artist,
            album,
            title,
        } = outcome.clone()
        else {
            panic!("expected playback, got {outcome:?}");
        };
        assert_eq!(artist, calls[0].items[0]);
        assert_eq!(album, calls[1].items[0]);
        assert_eq!(title, calls[2].items[0]);
    }

    #[rstest]
    fn test_album_flow_queue_album(library: InMemoryLibrary) {
        let mut selector = selector(library, vec![queue(0)]);
        let outcome = selector.album_flow(Some("Rush"), 0).unwrap();

        assert_eq!(outcome, Outcome::QueuedAlbum(Album::new("Rush", "2112")));
        assert_eq!(
            selector.client().commands,
            vec!["findadd album \"2112\" albumartist \"Rush\""]
        );
        assert_eq!(selector.menu().calls().len(), 1);
    }

    #[rstest]
    fn test_flows_cancelled(library: InMemoryLibrary) {
        let mut selector = selector(library, vec![]);
        assert_eq!(selector.album_flow(None, 0).unwrap(), Outcome::Cancelled);
        assert_eq!(selector.song_flow(0).unwrap(), Outcome::Cancelled);
        assert!(selector.client().commands.is_empty());
        assert_eq!(Outcome::Cancelled.to_string(), "");
    }

    #[test]
    fn test_flows_on_empty_library() {
        let mut selector = selector(InMemoryLibrary::default(), vec![]);
        assert_eq!(
            selector.artist_flow(0).unwrap().to_string(),
            "No artists found"
        );
        assert_eq!(
            selector.album_flow(None, 0).unwrap().to_string(),
            "No albums found"
        );
        assert_eq!(selector.song_flow(0).unwrap().to_string(), "No songs found");
        assert_eq!(
            selector.play_random_album().unwrap().to_string(),
            "No albums found"
        );
        assert_eq!(
            selector.show_playlist().unwrap().to_string(),
            "Playlist is empty"
        );
        assert!(selector.menu().calls().is_empty());
    }

    #[rstest]
    fn test_play_random_album(library: InMemoryLibrary) {
        let mut selector = selector(library, vec![]);
        let outcome = selector.play_random_album().unwrap();

        let Outcome::PlayingRandomAlbum { album, source } = outcome.clone() else {
            panic!("expected a random album, got {outcome:?}");
        };
        assert_eq!(source, AlbumSource::Library);
        assert_eq!(
            outcome.to_string(),
            format!("Playing random album:\n{}\n{}", album.artist, album.album)
        );
        assert_eq!(selector.client().commands.len(), 3);
        assert_eq!(
            selector.notifier().sent(),
            vec![(
                "Now Playing Album".to_string(),
                format!("{}\n{}", album.artist, album.album)
            )]
        );
    }

    #[rstest]
    fn test_quarantine_missing_file(library: InMemoryLibrary) {
        let mut selector = selector(library, vec![]);
        assert_eq!(
            selector.quarantine_flow(0).unwrap(),
            Outcome::NothingFound(Listing::QuarantineAlbums)
        );
        assert_eq!(
            selector.play_random_quarantine_album().unwrap().to_string(),
            "No quarantine albums found"
        );
    }

    #[rstest]
    fn test_show_playlist(library: InMemoryLibrary) {
        let mut library = library;
        library.playlist = vec![
            song("Queen", "Jazz", "Mustapha", Some("1/13")),
            song("", "", "", None),
            song("Queen", "Jazz", "Jealousy", Some("3/13")),
        ];
        library.status = Status(HashMap::from([("song".to_string(), "2".to_string())]));

        let mut selector = selector(library, vec![play(1)]);
        let outcome = selector.show_playlist().unwrap();

        let calls = selector.menu().calls();
        assert_eq!(
            calls[0].items,
            vec![
                "Queen\t01 Mustapha",
                "Unknown Artist\tUnknown Title",
                "Queen\t03 Jealousy"
            ]
        );
        assert_eq!(calls[0].prompt, "Playlist:");
        assert_eq!(calls[0].selected_row, 2);
        assert!(calls[0].columns);

        assert_eq!(selector.client().commands, vec!["play 1"]);
        assert_eq!(
            outcome,
            Outcome::Playing {
                artist: "Unknown Artist".into(),
                album: "Unknown Album".into(),
                title: "Unknown Title".into(),
            }
        );
        assert_eq!(
            selector.notifier().sent(),
            vec![(
                "Now Playing".to_string(),
                "Unknown Artist\nUnknown Album\nUnknown Title".to_string()
            )]
        );
    }
}
