// Copyright (c) 2024 The music_selection authors.
//
// Licensed under the MIT License. You may obtain a copy of the License in
// the LICENSE file at the root of this repository.

mod client;
pub mod errors;
pub(crate) mod protocol;

pub use client::{MpdClient, MpdConnectionConfig};
pub use errors::MpdError;
pub type MpdResult<T> = std::result::Result<T, MpdError>;
