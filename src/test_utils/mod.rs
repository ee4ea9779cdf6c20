// Copyright (c) 2024 The music_selection authors.
//
// Licensed under the MIT License. You may obtain a copy of the License in
// the LICENSE file at the root of this repository.

//! In-memory stand-ins for the MPD server, the menu and the notifier.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::library::{MusicLibrary, Playback};
use crate::menu::{Menu, Selection};
use crate::models::{Album, Song, Status, Tag};
use crate::mpd::MpdResult;
use crate::notify::Notifier;
use crate::Result;

pub fn song(artist: &str, album: &str, title: &str, track: Option<&str>) -> Song {
    Song {
        file: format!("{artist}/{album}/{title}.flac"),
        artist: artist.to_string(),
        album: album.to_string(),
        title: title.to_string(),
        track: track.map(String::from),
    }
}

/// Library and player backed by a list of songs.
///
/// Playback calls are recorded in `commands`, in MPD syntax.
#[derive(Debug, Default)]
pub struct InMemoryLibrary {
    pub songs: Vec<Song>,
    pub playlist: Vec<Song>,
    pub status: Status,
    pub commands: Vec<String>,
}

impl InMemoryLibrary {
    pub fn new(songs: Vec<Song>) -> Self {
        Self {
            songs,
            ..Default::default()
        }
    }

    fn matches(song: &Song, tag: Tag, value: &str) -> bool {
        match tag {
            Tag::AlbumArtist => song.artist == value,
            Tag::Album => song.album == value,
            Tag::Title => song.title == value,
        }
    }

    fn find(&self, filters: &[(Tag, &str)]) -> Vec<Song> {
        self.songs
            .iter()
            .filter(|s| filters.iter().all(|(t, v)| Self::matches(s, *t, v)))
            .cloned()
            .collect()
    }
}

impl MusicLibrary for InMemoryLibrary {
    fn artists(&mut self) -> MpdResult<Vec<String>> {
        let mut artists: Vec<String> = self
            .songs
            .iter()
            .map(|s| s.artist.clone())
            .filter(|a| !a.trim().is_empty())
            .collect();
        artists.sort();
        artists.dedup();
        Ok(artists)
    }

    fn albums(&mut self, artist: Option<&str>) -> MpdResult<Vec<Album>> {
        let songs = match artist {
            Some(artist) => self.find(&[(Tag::AlbumArtist, artist)]),
            None => self.songs.clone(),
        };
        Ok(crate::mpd::protocol::parse_albums(&songs))
    }

    fn songs(&mut self, artist: Option<&str>, album: Option<&str>) -> MpdResult<Vec<Song>> {
        Ok(match (artist, album) {
            (Some(artist), Some(album)) => {
                self.find(&[(Tag::AlbumArtist, artist), (Tag::Album, album)])
            }
            _ => self.songs.clone(),
        })
    }

    fn song_album(&mut self, artist: &str, title: &str) -> MpdResult<Option<String>> {
        Ok(self
            .find(&[(Tag::AlbumArtist, artist), (Tag::Title, title)])
            .into_iter()
            .map(|s| s.album)
            .find(|a| !a.is_empty()))
    }

    fn playlist(&mut self) -> MpdResult<Vec<Song>> {
        Ok(self.playlist.clone())
    }

    fn status(&mut self) -> MpdResult<Status> {
        Ok(self.status.clone())
    }
}

impl Playback for InMemoryLibrary {
    fn clear(&mut self) -> MpdResult<()> {
        self.commands.push("clear".to_string());
        self.playlist.clear();
        Ok(())
    }

    fn find_add(&mut self, filters: &[(Tag, &str)]) -> MpdResult<()> {
        self.commands
            .push(crate::mpd::protocol::filter_command("findadd", filters));
        let found = self.find(filters);
        self.playlist.extend(found);
        Ok(())
    }

    fn play(&mut self, position: Option<usize>) -> MpdResult<()> {
        self.commands.push(match position {
            Some(p) => format!("play {p}"),
            None => "play".to_string(),
        });
        Ok(())
    }
}

/// A prompt shown through [`ScriptedMenu`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCall {
    pub items: Vec<String>,
    pub prompt: String,
    pub selected_row: usize,
    pub columns: bool,
}

/// [`Menu`] answering with pre-recorded selections, in order. Runs out into
/// [`Selection::Cancelled`].
#[derive(Debug, Default)]
pub struct ScriptedMenu {
    answers: RefCell<VecDeque<Selection>>,
    calls: RefCell<Vec<MenuCall>>,
}

impl ScriptedMenu {
    pub fn new(answers: impl IntoIterator<Item = Selection>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<MenuCall> {
        self.calls.borrow().clone()
    }
}

impl Menu for ScriptedMenu {
    fn select(
        &self,
        items: &[String],
        prompt: &str,
        selected_row: usize,
        columns: bool,
    ) -> Result<Selection> {
        if items.is_empty() {
            return Ok(Selection::Cancelled);
        }
        self.calls.borrow_mut().push(MenuCall {
            items: items.to_vec(),
            prompt: prompt.to_string(),
            selected_row,
            columns,
        });
        Ok(self
            .answers
            .borrow_mut()
            .pop_front()
            .unwrap_or(Selection::Cancelled))
    }
}

/// [`Notifier`] keeping every `(summary, body)` it was asked to show.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: RefCell<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, summary: &str, body: &str) {
        self.sent
            .borrow_mut()
            .push((summary.to_string(), body.to_string()));
    }
}
