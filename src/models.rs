// Copyright (c) 2024 The music_selection authors.
//
// Licensed under the MIT License. You may obtain a copy of the License in
// the LICENSE file at the root of this repository.

use std::collections::HashMap;
use std::fmt::Display;

/// A song as reported by MPD.
///
/// `artist` holds the `AlbumArtist` tag. Tags missing on the server side are
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Song {
    pub file: String,
    pub artist: String,
    pub album: String,
    pub title: String,
    pub track: Option<String>,
}

impl Song {
    /// Track number shown in front of the title, e.g. `03` for `3/12`.
    ///
    /// `None` if there is no `Track` tag or its number part is empty.
    pub fn track_label(&self) -> Option<String> {
        let track = self.track.as_deref()?;
        let number = track.split('/').next().unwrap_or(track);
        if number.is_empty() {
            return None;
        }
        Some(format!("{:02}", number.trim().parse::<u32>().unwrap_or(0)))
    }
}

/// An album, identified by its album artist and name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Album {
    pub artist: String,
    pub album: String,
}

impl Album {
    pub fn new(artist: impl Into<String>, album: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            album: album.into(),
        }
    }
}

/// Response of the `status` command.
#[derive(Debug, Clone, Default)]
pub struct Status(pub HashMap<String, String>);

impl Status {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Playlist position (0-based) of the current song.
    pub fn song_position(&self) -> Option<usize> {
        self.get("song").and_then(|s| s.parse().ok())
    }
}

/// Tag filter used by `find` and `findadd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    AlbumArtist,
    Album,
    Title,
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tag::AlbumArtist => write!(f, "albumartist"),
            Tag::Album => write!(f, "album"),
            Tag::Title => write!(f, "title"),
        }
    }
}
