//! Display instructions: one per ladder row
//!
//! An instruction tells a renderer what a row looks like. It carries no
//! behaviour; renderers match on [`DisplayType`] and read the other fields.

use crate::core::{LadderWord, MoveRating};
use std::fmt;

/// Role of a row in the ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayType {
    /// A word played before the active word (or the active word once the game is lost)
    Played,
    /// Active word; the next move adds a letter
    PlayedAdd,
    /// Active word; the next move changes the letter at `change_position`
    PlayedChange,
    /// Active word; the next move deletes a letter
    PlayedDelete,
    /// Active word mid-add: letters plus the hole awaiting a letter
    WordAfterAdd,
    /// The word the pending change produces, with the changing letter as a hole
    WordAfterChange,
    /// A word still to be found; letters hidden
    Future,
    /// The target word
    Target,
}

impl DisplayType {
    /// Whether this row is the word the player acts on next
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(
            self,
            Self::PlayedAdd | Self::PlayedChange | Self::PlayedDelete | Self::WordAfterAdd
        )
    }

    /// Short label used in logs and terminal output
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Played => "played",
            Self::PlayedAdd => "add",
            Self::PlayedChange => "change",
            Self::PlayedDelete => "delete",
            Self::WordAfterAdd => "after-add",
            Self::WordAfterChange => "after-change",
            Self::Future => "future",
            Self::Target => "target",
        }
    }
}

impl fmt::Display for DisplayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rendering instruction for one ladder row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayInstruction {
    /// Row contents; for `Future` rows only the length is meant to be shown
    pub word: LadderWord,
    pub display_type: DisplayType,
    /// 1-based slot to highlight, 0 for none
    pub change_position: usize,
    pub move_rating: MoveRating,
    /// Set on the first row only
    pub is_start_word: bool,
    /// Set on the row where the original optimal solution reached the target
    pub show_par_line: bool,
}

impl DisplayInstruction {
    /// Instruction with both post-pass flags cleared
    #[must_use]
    pub fn new(
        word: LadderWord,
        display_type: DisplayType,
        change_position: usize,
        move_rating: MoveRating,
    ) -> Self {
        Self {
            word,
            display_type,
            change_position,
            move_rating,
            is_start_word: false,
            show_par_line: false,
        }
    }

    #[must_use]
    pub fn start_word(mut self) -> Self {
        self.is_start_word = true;
        self
    }

    #[must_use]
    pub fn par_line(mut self) -> Self {
        self.show_par_line = true;
        self
    }
}

impl fmt::Display for DisplayInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},word:{}", self.display_type, self.word)?;
        if self.change_position != 0 {
            write!(f, ",changePosition:{}", self.change_position)?;
        }
        if self.move_rating != MoveRating::NoRating {
            write!(f, ",moveRating:{}", self.move_rating)?;
        }
        if self.is_start_word {
            f.write_str(",start")?;
        }
        if self.show_par_line {
            f.write_str(",par")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn flags_default_off() {
        let word = LadderWord::plain(&Word::new("corn").unwrap());
        let instruction =
            DisplayInstruction::new(word, DisplayType::PlayedAdd, 0, MoveRating::NoRating);
        assert!(!instruction.is_start_word);
        assert!(!instruction.show_par_line);

        let flagged = instruction.start_word().par_line();
        assert!(flagged.is_start_word);
        assert!(flagged.show_par_line);
    }

    #[test]
    fn display_for_debugging() {
        let word = LadderWord::blanked(&Word::new("adorn").unwrap(), 1).unwrap();
        let instruction =
            DisplayInstruction::new(word, DisplayType::WordAfterChange, 5, MoveRating::NoRating);
        assert_eq!(
            instruction.to_string(),
            "(after-change,word:A?ORN,changePosition:5)"
        );
    }

    #[test]
    fn active_types() {
        assert!(DisplayType::PlayedAdd.is_active());
        assert!(DisplayType::PlayedChange.is_active());
        assert!(DisplayType::PlayedDelete.is_active());
        assert!(DisplayType::WordAfterAdd.is_active());
        assert!(!DisplayType::WordAfterChange.is_active());
        assert!(!DisplayType::Played.is_active());
        assert!(!DisplayType::Future.is_active());
        assert!(!DisplayType::Target.is_active());
    }
}
