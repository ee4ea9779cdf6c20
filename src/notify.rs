// Copyright (c) 2024 The music_selection authors.
//
// Licensed under the MIT License. You may obtain a copy of the License in
// the LICENSE file at the root of this repository.

use std::ffi::OsString;
use std::process::{Command, Stdio};
use std::time::Duration;

use log::warn;

pub const SUMMARY_NOW_PLAYING: &str = "Now Playing";
pub const SUMMARY_NOW_PLAYING_ALBUM: &str = "Now Playing Album";

/// Desktop notifications. Delivery is best effort and never fails the caller.
pub trait Notifier {
    fn notify(&self, summary: &str, body: &str);
}

/// [`Notifier`] running `notify-send`.
#[derive(Debug, Clone)]
pub struct NotifySend {
    program: OsString,
    timeout: Duration,
}

impl NotifySend {
    pub fn new(timeout: Duration) -> Self {
        Self::with_program("notify-send", timeout)
    }

    pub fn with_program(program: impl Into<OsString>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }
}

impl Default for NotifySend {
    fn default() -> Self {
        Self::new(Duration::from_millis(3000))
    }
}

impl Notifier for NotifySend {
    fn notify(&self, summary: &str, body: &str) {
        let result = Command::new(&self.program)
            .args(["-t", &self.timeout.as_millis().to_string(), summary, body])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status();
        match result {
            Ok(status) if status.success() => {}
            Ok(status) => warn!("Notification '{summary}' failed: {status}"),
            Err(e) => warn!(
                "Cannot run '{}' for notification '{summary}': {e}",
                self.program.to_string_lossy()
            ),
        }
    }
}

/// Body of an album notification.
pub fn album_body(artist: &str, album: &str) -> String {
    format!("{artist}\n{album}")
}

/// Body of a song notification.
pub fn song_body(artist: &str, album: &str, title: &str) -> String {
    format!("{artist}\n{album}\n{title}")
}
