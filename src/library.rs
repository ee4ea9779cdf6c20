// Copyright (c) 2024 The music_selection authors.
//
// Licensed under the MIT License. You may obtain a copy of the License in
// the LICENSE file at the root of this repository.

use crate::models::{Album, Song, Status, Tag};
use crate::mpd::MpdResult;

/// Read access to the music database and the current playlist.
pub trait MusicLibrary {
    /// All album artists with a non-blank name.
    fn artists(&mut self) -> MpdResult<Vec<String>>;

    /// Albums of `artist`, or of the whole library.
    fn albums(&mut self, artist: Option<&str>) -> MpdResult<Vec<Album>>;

    /// Songs of one album when both filters are given, otherwise every song
    /// in the library.
    fn songs(&mut self, artist: Option<&str>, album: Option<&str>) -> MpdResult<Vec<Song>>;

    /// Album of the first song by `artist` titled `title`.
    fn song_album(&mut self, artist: &str, title: &str) -> MpdResult<Option<String>>;

    fn playlist(&mut self) -> MpdResult<Vec<Song>>;

    fn status(&mut self) -> MpdResult<Status>;
}

/// Playlist manipulation and playback control.
pub trait Playback {
    fn clear(&mut self) -> MpdResult<()>;

    /// Appends every song matching all `filters` to the playlist.
    fn find_add(&mut self, filters: &[(Tag, &str)]) -> MpdResult<()>;

    /// Starts playing at `position` (0-based), or resumes/starts from the
    /// beginning.
    fn play(&mut self, position: Option<usize>) -> MpdResult<()>;
}
