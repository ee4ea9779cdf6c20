// Copyright (c) 2024 The music_selection authors.
//
// Licensed under the MIT License. You may obtain a copy of the License in
// the LICENSE file at the root of this repository.

use std::ffi::OsString;
use std::io::Write;
use std::process::{Command, Stdio};

use log::debug;

use super::{align_columns, Action, Menu, Selection};
use crate::{Error, Result};

/// Exit code rofi uses for `-kb-custom-1`.
const EXIT_CUSTOM_1: i32 = 10;
/// Exit code rofi uses when the prompt is dismissed.
const EXIT_CANCELLED: i32 = 1;

/// [`Menu`] backed by `rofi -dmenu`.
///
/// `Return` plays the entry, `Ctrl+Return` queues it.
#[derive(Debug, Clone)]
pub struct RofiMenu {
    program: OsString,
    leading_args: Vec<OsString>,
}

impl RofiMenu {
    pub fn new() -> Self {
        Self::with_command("rofi", Vec::<OsString>::new())
    }

    /// Uses `program` with `leading_args` in place of `rofi`. The rofi
    /// arguments are appended after `leading_args`.
    pub fn with_command(
        program: impl Into<OsString>,
        leading_args: impl IntoIterator<Item = impl Into<OsString>>,
    ) -> Self {
        Self {
            program: program.into(),
            leading_args: leading_args.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for RofiMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl Menu for RofiMenu {
    fn select(
        &self,
        items: &[String],
        prompt: &str,
        selected_row: usize,
        columns: bool,
    ) -> Result<Selection> {
        if items.is_empty() {
            return Ok(Selection::Cancelled);
        }

        let input = if columns {
            align_columns(items).join("\n")
        } else {
            items.join("\n")
        };

        let mut child = Command::new(&self.program)
            .args(&self.leading_args)
            .args(["-i", "-dmenu", "-no-custom", "-format", "d"])
            .args(["-kb-custom-1", "Ctrl+Return", "-p", prompt])
            .args(["-selected-row", &selected_row.to_string()])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| {
                Error::MenuError(format!(
                    "cannot start '{}': {e}",
                    self.program.to_string_lossy()
                ))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(input.as_bytes()) {
                debug!("Menu closed its input early: {e}");
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|e| Error::MenuError(e.to_string()))?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_selection(output.status.code(), &stdout, items.len()))
    }
}

/// Maps rofi's exit code and its `-format d` output (1-based index) to a
/// [`Selection`].
fn parse_selection(exit_code: Option<i32>, stdout: &str, len: usize) -> Selection {
    let exit_code = exit_code.unwrap_or(EXIT_CANCELLED);
    if exit_code == EXIT_CANCELLED {
        return Selection::Cancelled;
    }

    match stdout.trim().parse::<usize>() {
        Ok(index) if index > 0 && index <= len => Selection::Chosen {
            index: index - 1,
            action: if exit_code == EXIT_CUSTOM_1 {
                Action::Queue
            } else {
                Action::Play
            },
        },
        _ => Selection::Cancelled,
    }
}
