// Copyright (c) 2024 The music_selection authors.
//
// Licensed under the MIT License. You may obtain a copy of the License in
// the LICENSE file at the root of this repository.

//! Pick music from an [MPD](https://www.musicpd.org/) library through a
//! rofi prompt, then play or queue it.
//!
//! [`MusicSelector`] drives the prompts. It talks to the server through the
//! [`MusicLibrary`] and [`Playback`] traits (implemented by [`MpdClient`]),
//! asks the user through a [`Menu`] ([`RofiMenu`]) and reports through a
//! [`Notifier`] ([`NotifySend`]).

pub mod cli;
mod config;
mod errors;
mod library;
pub mod menu;
mod models;
pub mod mpd;
pub mod notify;
pub mod quarantine;
mod selector;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use config::Config;
pub use errors::{Error, Result};
pub use library::{MusicLibrary, Playback};
pub use menu::{Action, Menu, RofiMenu, Selection};
pub use models::{Album, Song, Status, Tag};
pub use mpd::{MpdClient, MpdConnectionConfig, MpdError};
pub use notify::{Notifier, NotifySend};
pub use selector::{AlbumSource, Choice, Listing, MusicSelector, Outcome};
