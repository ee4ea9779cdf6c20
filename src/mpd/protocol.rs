// Copyright (c) 2024 The music_selection authors.
//
// Licensed under the MIT License. You may obtain a copy of the License in
// the LICENSE file at the root of this repository.

use std::collections::{BTreeSet, HashMap};

use super::MpdError;
use crate::models::{Album, Song, Status, Tag};

pub(crate) const GREETING_PREFIX: &str = "OK MPD ";
pub(crate) const RESPONSE_OK: &str = "OK";
pub(crate) const RESPONSE_ACK: &str = "ACK";

/// Quotes an argument, escaping backslashes and double quotes.
pub(crate) fn quote(arg: &str) -> String {
    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

pub(crate) fn command<'a>(name: &str, args: impl IntoIterator<Item = &'a str>) -> String {
    let mut line = name.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&quote(arg));
    }
    line
}

/// Builds `find`/`findadd` style commands out of tag filters.
pub(crate) fn filter_command(name: &str, filters: &[(Tag, &str)]) -> String {
    let mut line = name.to_string();
    for (tag, value) in filters {
        line.push_str(&format!(" {tag} {}", quote(value)));
    }
    line
}

pub(crate) fn parse_pair(line: &str) -> Option<(&str, &str)> {
    line.split_once(": ")
}

/// Parses `ACK [code@index] {command} message`.
pub(crate) fn parse_ack(line: &str) -> MpdError {
    let parsed = (|| {
        let rest = line.strip_prefix(RESPONSE_ACK)?.trim_start();
        let rest = rest.strip_prefix('[')?;
        let (codes, rest) = rest.split_once(']')?;
        let (code, index) = codes.split_once('@')?;
        let rest = rest.trim_start().strip_prefix('{')?;
        let (command, message) = rest.split_once('}')?;
        Some(MpdError::Ack {
            code: code.parse().ok()?,
            index: index.parse().ok()?,
            command: command.to_string(),
            message: message.trim().to_string(),
        })
    })();
    parsed.unwrap_or_else(|| MpdError::ProtocolError(line.to_string()))
}

/// Groups a response into songs.
///
/// Every `file` key starts a song. `directory` and `playlist` entries (as sent
/// by `listallinfo`) close the current song.
pub(crate) fn parse_songs(lines: &[String]) -> Vec<Song> {
    let mut songs = Vec::new();
    let mut current: Option<Song> = None;

    for (key, value) in lines.iter().filter_map(|l| parse_pair(l)) {
        match key {
            "file" => {
                songs.extend(current.take());
                current = Some(Song {
                    file: value.to_string(),
                    ..Default::default()
                });
            }
            "directory" | "playlist" => songs.extend(current.take()),
            _ => {
                let Some(song) = current.as_mut() else {
                    continue;
                };
                match key {
                    "AlbumArtist" => song.artist = value.to_string(),
                    "Album" => song.album = value.to_string(),
                    "Title" => song.title = value.to_string(),
                    "Track" => song.track = Some(value.to_string()),
                    _ => {}
                }
            }
        }
    }
    songs.extend(current);
    songs
}

pub(crate) fn parse_albums(songs: &[Song]) -> Vec<Album> {
    songs
        .iter()
        .filter(|s| !s.artist.is_empty() && !s.album.is_empty())
        .map(|s| Album::new(s.artist.as_str(), s.album.as_str()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub(crate) fn parse_artists(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|l| parse_pair(l))
        .filter(|(key, value)| *key == "AlbumArtist" && !value.trim().is_empty())
        .map(|(_, value)| value.to_string())
        .collect()
}

pub(crate) fn parse_status(lines: &[String]) -> Status {
    Status(
        lines
            .iter()
            .filter_map(|l| parse_pair(l))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>(),
    )
}
