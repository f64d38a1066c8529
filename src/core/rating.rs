//! Move quality ratings
//!
//! Every played word carries a rating describing its effect on the remaining
//! solution length. The display engine only passes ratings through.

use std::fmt;

/// Quality of a played word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MoveRating {
    /// Start word, words with a pending hole, and the target while in play
    #[default]
    NoRating,
    /// Did not lengthen the solution
    GoodMove,
    /// Lengthened the solution by one step
    WrongMove,
    /// Lengthened the solution by two or more steps
    DodoMove,
    /// Shortened the solution
    GeniusMove,
    /// Kept the solution length, but is not a common word
    ScrabbleMove,
    /// Revealed to the player rather than played
    ShownMove,
}

impl MoveRating {
    /// Whether this rating counts against the player
    #[must_use]
    pub const fn is_penalty(self) -> bool {
        matches!(self, Self::WrongMove | Self::DodoMove | Self::ShownMove)
    }

    /// Short label used in logs and terminal output
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoRating => "unrated",
            Self::GoodMove => "good",
            Self::WrongMove => "wrong",
            Self::DodoMove => "dodo",
            Self::GeniusMove => "genius",
            Self::ScrabbleMove => "scrabble",
            Self::ShownMove => "shown",
        }
    }
}

impl fmt::Display for MoveRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
