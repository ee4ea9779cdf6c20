use std::path::PathBuf;

use thiserror::Error;

use crate::mpd::MpdError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    MpdError(#[from] MpdError),

    #[error("Menu failed: {0}")]
    MenuError(String),

    #[error("Cannot read quarantine file '{}': {source}", path.display())]
    QuarantineError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    RegexError(#[from] regex::Error),

    #[error("Cannot determine the home directory")]
    NoHomeDir,
}
