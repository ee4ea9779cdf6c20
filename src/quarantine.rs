// Copyright (c) 2024 The music_selection authors.
//
// Licensed under the MIT License. You may obtain a copy of the License in
// the LICENSE file at the root of this repository.

//! The quarantine list: albums set aside to be listened to later.
//!
//! One album per line, written as `"artist", "album"`.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use regex::Regex;

use crate::models::Album;
use crate::{Error, Result};

const LINE_PATTERN: &str = r#"^"([^"]*)",\s*"([^"]*)"$"#;

/// Default location, `$HOME/music/quarantine`.
pub fn default_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(Error::NoHomeDir)?;
    Ok(home.join("music").join("quarantine"))
}

/// Parses the content of a quarantine file. Lines that do not match the
/// format are skipped.
pub fn parse(content: &str) -> Result<Vec<Album>> {
    let re = Regex::new(LINE_PATTERN)?;
    let mut albums = Vec::new();

    for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match re.captures(line) {
            Some(captures) => albums.push(Album::new(&captures[1], &captures[2])),
            None => debug!("Skipping quarantine line '{line}'"),
        }
    }
    Ok(albums)
}

/// Loads the albums listed in `path`.
///
/// A missing file yields an empty list.
pub fn load(path: &Path) -> Result<Vec<Album>> {
    if !path.exists() {
        warn!("Quarantine file '{}' does not exist", path.display());
        println!("Quarantine file not found: {}", path.display());
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path).map_err(|source| Error::QuarantineError {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content)
}
