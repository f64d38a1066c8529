//! Formatting utilities for terminal output

use crate::core::{HOLE_CHAR, MoveRating};
use crate::display::{DisplayInstruction, DisplayType};
use colored::Color;

/// Placeholder shown for each letter of a word not yet found
pub const HIDDEN_CHAR: char = '_';

/// Marker shown under the letter to change
pub const CHANGE_MARK: char = '^';

/// Format the letters of a row, one cell per slot
///
/// Future rows show only their length; holes show as `?`.
#[must_use]
pub fn row_cells(row: &DisplayInstruction) -> String {
    let hidden = row.display_type == DisplayType::Future;
    (0..row.word.len())
        .map(|slot| match row.word.slot(slot) {
            _ if hidden => HIDDEN_CHAR,
            Some(letter) => letter,
            None => HOLE_CHAR,
        })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Line placing `^` under the highlighted cell of [`row_cells`] output
///
/// Returns `None` when the row has no highlighted letter.
#[must_use]
pub fn change_marker(row: &DisplayInstruction) -> Option<String> {
    let position = row.change_position;
    if position == 0 || position > row.word.len() {
        return None;
    }
    Some(format!("{}{CHANGE_MARK}", " ".repeat((position - 1) * 2)))
}

/// Dashed separator for the par line
#[must_use]
pub fn par_line(width: usize) -> String {
    "-".repeat(width)
}

/// Colour keyed by move rating; unrated rows stay plain
#[must_use]
pub const fn rating_color(rating: MoveRating) -> Option<Color> {
    match rating {
        MoveRating::NoRating => None,
        MoveRating::GoodMove => Some(Color::Green),
        MoveRating::WrongMove => Some(Color::Yellow),
        MoveRating::DodoMove => Some(Color::Red),
        MoveRating::GeniusMove => Some(Color::Cyan),
        MoveRating::ScrabbleMove => Some(Color::Blue),
        MoveRating::ShownMove => Some(Color::BrightBlack),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
