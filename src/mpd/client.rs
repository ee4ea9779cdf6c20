// Copyright (c) 2024 The music_selection authors.
//
// Licensed under the MIT License. You may obtain a copy of the License in
// the LICENSE file at the root of this repository.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;
use std::time::Duration;

use log::debug;

use super::protocol::{self, GREETING_PREFIX, RESPONSE_ACK, RESPONSE_OK};
use super::{MpdError, MpdResult};
use crate::library::{MusicLibrary, Playback};
use crate::models::{Album, Song, Status, Tag};

/// Where and how to reach the MPD server.
#[derive(Debug, Clone)]
pub struct MpdConnectionConfig {
    pub host: String,
    pub port: u16,
    pub password: Option<String>,
    /// Read timeout for server responses. `None` blocks forever.
    pub timeout: Option<Duration>,
}

impl MpdConnectionConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            password: None,
            timeout: None,
        }
    }
}

impl Default for MpdConnectionConfig {
    fn default() -> Self {
        Self::new("localhost", 6600)
    }
}

/// Blocking client for the MPD text protocol.
///
/// Commands are sent one at a time; every call waits for the `OK` (or `ACK`)
/// that terminates the response.
#[derive(Debug)]
pub struct MpdClient {
    reader: BufReader<TcpStream>,
    version: String,
}

impl MpdClient {
    /// Connects to the server and validates its greeting.
    ///
    /// If a password is configured it is sent right away.
    pub fn connect(config: &MpdConnectionConfig) -> MpdResult<Self> {
        debug!("Connecting to MPD at {}:{}", config.host, config.port);
        let stream = TcpStream::connect((config.host.as_str(), config.port))?;
        stream.set_read_timeout(config.timeout)?;

        let mut reader = BufReader::new(stream);
        let greeting = read_line(&mut reader)?;
        let version = greeting
            .strip_prefix(GREETING_PREFIX)
            .ok_or_else(|| MpdError::InvalidGreeting(greeting.clone()))?
            .to_string();
        debug!("Connected to MPD {version}");

        let mut client = Self { reader, version };
        if let Some(password) = &config.password {
            client.send(&protocol::command("password", [password.as_str()]))?;
        }
        Ok(client)
    }

    /// Protocol version announced by the server.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Sends a raw command line and returns the response lines before `OK`.
    pub fn send(&mut self, command: &str) -> MpdResult<Vec<String>> {
        debug!("> {command}");
        let stream = self.reader.get_mut();
        stream.write_all(command.as_bytes())?;
        stream.write_all(b"\n")?;
        stream.flush()?;

        let mut lines = Vec::new();
        loop {
            let line = read_line(&mut self.reader)?;
            if line == RESPONSE_OK {
                break;
            }
            if line.starts_with(RESPONSE_ACK) {
                debug!("< {line}");
                return Err(protocol::parse_ack(&line));
            }
            lines.push(line);
        }
        debug!("< {} lines", lines.len());
        Ok(lines)
    }

    fn find(&mut self, filters: &[(Tag, &str)]) -> MpdResult<Vec<Song>> {
        let lines = self.send(&protocol::filter_command("find", filters))?;
        Ok(protocol::parse_songs(&lines))
    }

    fn list_all(&mut self) -> MpdResult<Vec<Song>> {
        let lines = self.send("listallinfo")?;
        Ok(protocol::parse_songs(&lines))
    }
}

fn read_line(reader: &mut BufReader<TcpStream>) -> MpdResult<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(MpdError::ConnectionClosed);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

impl MusicLibrary for MpdClient {
    fn artists(&mut self) -> MpdResult<Vec<String>> {
        let lines = self.send("list albumartist")?;
        Ok(protocol::parse_artists(&lines))
    }

    fn albums(&mut self, artist: Option<&str>) -> MpdResult<Vec<Album>> {
        let songs = match artist {
            Some(artist) => self.find(&[(Tag::AlbumArtist, artist)])?,
            None => self.list_all()?,
        };
        Ok(protocol::parse_albums(&songs))
    }

    fn songs(&mut self, artist: Option<&str>, album: Option<&str>) -> MpdResult<Vec<Song>> {
        match (artist, album) {
            (Some(artist), Some(album)) => {
                self.find(&[(Tag::AlbumArtist, artist), (Tag::Album, album)])
            }
            _ => self.list_all(),
        }
    }

    fn song_album(&mut self, artist: &str, title: &str) -> MpdResult<Option<String>> {
        let songs = self.find(&[(Tag::AlbumArtist, artist), (Tag::Title, title)])?;
        Ok(songs
            .into_iter()
            .map(|s| s.album)
            .find(|album| !album.is_empty()))
    }

    fn playlist(&mut self) -> MpdResult<Vec<Song>> {
        let lines = self.send("playlistinfo")?;
        Ok(protocol::parse_songs(&lines))
    }

    fn status(&mut self) -> MpdResult<Status> {
        let lines = self.send("status")?;
        Ok(protocol::parse_status(&lines))
    }
}

impl Playback for MpdClient {
    fn clear(&mut self) -> MpdResult<()> {
        self.send("clear").map(|_| ())
    }

    fn find_add(&mut self, filters: &[(Tag, &str)]) -> MpdResult<()> {
        self.send(&protocol::filter_command("findadd", filters))
            .map(|_| ())
    }

    fn play(&mut self, position: Option<usize>) -> MpdResult<()> {
        let command = match position {
            Some(position) => format!("play {position}"),
            None => "play".to_string(),
        };
        self.send(&command).map(|_| ())
    }
}
