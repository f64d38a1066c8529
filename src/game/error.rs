//! Errors raised by game actions

use crate::core::{Word, WordError};
use std::fmt;

/// Why a game could not be created or an action was refused
///
/// A refused action leaves the puzzle state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No ladder is known between the start and target words
    NoSolution { start: Word, target: Word },
    NotAWord(Word),
    NotOneStep { from: Word, to: Word },
    Duplicate(Word),
    /// The word is valid but no ladder leads from it to the target
    DeadEnd(Word),
    GameOver,
    /// The action needs a complete active word, but a letter is pending
    HolePending,
    /// Nothing left to show
    NothingUnplayed,
    /// 1-based position (0-based for add) outside the active word
    BadPosition(usize),
    InvalidWord(WordError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSolution { start, target } => {
                write!(f, "No solution from {start} to {target}")
            }
            Self::NotAWord(word) => write!(f, "{word}: not in word list"),
            Self::NotOneStep { from, to } => write!(f, "{to} is not one step from {from}"),
            Self::Duplicate(word) => write!(f, "{word}: already played"),
            Self::DeadEnd(word) => write!(f, "{word}: no solution from this word"),
            Self::GameOver => write!(f, "The game is over"),
            Self::HolePending => write!(f, "Pick a letter for the new space first"),
            Self::NothingUnplayed => write!(f, "No moves left to show"),
            Self::BadPosition(position) => write!(f, "No letter at position {position}"),
            Self::InvalidWord(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(err) => Some(err),
            _ => None,
        }
    }
}

impl From<WordError> for GameError {
    fn from(err: WordError) -> Self {
        Self::InvalidWord(err)
    }
}
