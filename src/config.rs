// Copyright (c) 2024 The music_selection authors.
//
// Licensed under the MIT License. You may obtain a copy of the License in
// the LICENSE file at the root of this repository.

use std::path::PathBuf;
use std::time::Duration;

use crate::mpd::MpdConnectionConfig;
use crate::{quarantine, Result};

pub const DEFAULT_NOTIFICATION_TIMEOUT: Duration = Duration::from_millis(3000);

/// Runtime configuration of the selector.
#[derive(Debug, Clone)]
pub struct Config {
    pub mpd: MpdConnectionConfig,
    pub quarantine_path: PathBuf,
    pub notification_timeout: Duration,
}

impl Config {
    /// Creates a configuration for `mpd`.
    ///
    /// Without `quarantine_path` the list is read from
    /// `$HOME/music/quarantine`.
    pub fn new(mpd: MpdConnectionConfig, quarantine_path: Option<PathBuf>) -> Result<Self> {
        let quarantine_path = match quarantine_path {
            Some(path) => path,
            None => quarantine::default_path()?,
        };
        Ok(Self {
            mpd,
            quarantine_path,
            notification_timeout: DEFAULT_NOTIFICATION_TIMEOUT,
        })
    }
}
