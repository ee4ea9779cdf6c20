// Copyright (c) 2024 The music_selection authors.
//
// Licensed under the MIT License. You may obtain a copy of the License in
// the LICENSE file at the root of this repository.

mod rofi;

pub use rofi::RofiMenu;

use crate::Result;

/// Separator placed between aligned columns.
pub const COLUMN_SEPARATOR: &str = "           ";

/// What the user wants to do with the chosen entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Replace the playlist and start playing.
    Play,
    /// Append to the playlist.
    Queue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Cancelled,
    Chosen { index: usize, action: Action },
}

/// An interactive prompt that lets the user pick one entry out of a list.
pub trait Menu {
    /// Shows `items` and returns the chosen one.
    ///
    /// `selected_row` is highlighted initially. With `columns`, tab separated
    /// cells are aligned before display. An empty list is always
    /// [`Selection::Cancelled`].
    fn select(
        &self,
        items: &[String],
        prompt: &str,
        selected_row: usize,
        columns: bool,
    ) -> Result<Selection>;
}

/// Aligns tab separated rows into columns.
///
/// All columns but the last are padded to their widest cell and joined with
/// [`COLUMN_SEPARATOR`]. Every cell counts towards its column width, even
/// the only cell of a row without tabs.
pub fn align_columns(items: &[String]) -> Vec<String> {
    let rows: Vec<Vec<&str>> = items.iter().map(|i| i.split('\t').collect()).collect();

    let mut widths: Vec<usize> = Vec::new();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            let width = cell.chars().count();
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(width),
                None => widths.push(width),
            }
        }
    }
    let last_column = widths.len().saturating_sub(1);

    rows.iter()
        .map(|row| {
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    line.push_str(COLUMN_SEPARATOR);
                }
                line.push_str(cell);
                if i < last_column && i + 1 < row.len() {
                    let padding = widths[i] - cell.chars().count();
                    line.extend(std::iter::repeat(' ').take(padding));
                }
            }
            line
        })
        .collect()
}
