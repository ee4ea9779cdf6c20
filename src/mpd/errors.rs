// Copyright (c) 2024 The music_selection authors.
//
// Licensed under the MIT License. You may obtain a copy of the License in
// the LICENSE file at the root of this repository.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MpdError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("Invalid MPD greeting '{0}'")]
    InvalidGreeting(String),

    #[error("MPD error {code} in '{command}': {message}")]
    Ack {
        code: u32,
        index: u32,
        command: String,
        message: String,
    },

    #[error("Protocol error. Unexpected data received from server: '{0}'")]
    ProtocolError(String),

    #[error("Connection to MPD closed")]
    ConnectionClosed,
}
