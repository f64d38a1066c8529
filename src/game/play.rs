//! Validated player actions
//!
//! [`Game`] pairs a puzzle state with the path finder that rates it, and
//! refuses any action that would leave the ladder broken. A refused action
//! leaves the state untouched.

use super::error::GameError;
use super::paths::PathFinder;
use super::state::{GameConfig, PuzzleState};
use crate::core::{MoveRating, Word, step};
use crate::display::{BuildError, DisplayInstruction, InstructionBuilder};
use std::fmt;
use std::str::FromStr;

/// One player action
///
/// Text form, as accepted by `FromStr`:
///
/// | Text  | Action |
/// |-------|--------|
/// | `+N`  | open a space before the 0-based slot `N` (`+0` is the front) |
/// | `-N`  | delete the letter at 1-based position `N` |
/// | `N=X` | put letter `X` at 1-based position `N` |
/// | `?`   | show the next word |
/// | `!`   | show every remaining word |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddSpace(usize),
    Delete(usize),
    /// Change a letter, or fill the pending space when `position` is its slot
    Letter { position: usize, letter: char },
    ShowNext,
    ShowAll,
}

/// Unrecognised action text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionParseError(pub String);

impl fmt::Display for ActionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid action '{}': expected +N, -N, N=X, ? or !",
            self.0
        )
    }
}

impl std::error::Error for ActionParseError {}

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || ActionParseError(text.to_string());

        match text {
            "?" => return Ok(Self::ShowNext),
            "!" => return Ok(Self::ShowAll),
            _ => {}
        }

        if let Some(index) = text.strip_prefix('+') {
            return index.parse().map(Self::AddSpace).map_err(|_| invalid());
        }
        if let Some(position) = text.strip_prefix('-') {
            return position.parse().map(Self::Delete).map_err(|_| invalid());
        }

        let (position, letter) = text.split_once('=').ok_or_else(invalid)?;
        let position = position.parse().map_err(|_| invalid())?;
        let mut letters = letter.chars();
        match (letters.next(), letters.next()) {
            (Some(letter), None) if letter.is_ascii_alphabetic() => Ok(Self::Letter {
                position,
                letter: letter.to_ascii_uppercase(),
            }),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddSpace(index) => write!(f, "+{index}"),
            Self::Delete(position) => write!(f, "-{position}"),
            Self::Letter { position, letter } => write!(f, "{position}={letter}"),
            Self::ShowNext => f.write_str("?"),
            Self::ShowAll => f.write_str("!"),
        }
    }
}

/// A puzzle being played against a path finder
#[derive(Debug, Clone)]
pub struct Game<P: PathFinder> {
    finder: P,
    state: PuzzleState,
}

impl<P: PathFinder> Game<P> {
    /// Start a puzzle from `start` to `target`
    ///
    /// # Errors
    /// Returns `GameError::NoSolution` if `finder` knows no ladder between them.
    ///
    /// # Examples
    /// ```
    /// use wordchain::core::{MoveRating, Word};
    /// use wordchain::game::{Action, Game, GameConfig, KnownLadders};
    /// use wordchain::ladders::Ladder;
    ///
    /// let finder = KnownLadders::new(vec![Ladder::parse("dog cog cot cat").unwrap()]);
    /// let start = Word::new("dog").unwrap();
    /// let target = Word::new("cat").unwrap();
    /// let mut game = Game::new(finder, start, target, GameConfig::default()).unwrap();
    ///
    /// let rating = game.apply(Action::Letter { position: 1, letter: 'C' }).unwrap();
    /// assert_eq!(rating, MoveRating::GoodMove);
    /// ```
    pub fn new(
        finder: P,
        start: Word,
        target: Word,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        let state = PuzzleState::new(start, target, &finder, config)?;
        Ok(Self { finder, state })
    }

    /// Continue from an existing state
    #[must_use]
    pub const fn from_state(finder: P, state: PuzzleState) -> Self {
        Self { finder, state }
    }

    #[must_use]
    pub const fn state(&self) -> &PuzzleState {
        &self.state
    }

    #[must_use]
    pub const fn finder(&self) -> &P {
        &self.finder
    }

    /// Rows to draw for the current state
    ///
    /// # Errors
    /// Returns `BuildError` if the state does not form a connected ladder.
    pub fn instructions(&self) -> Result<Vec<DisplayInstruction>, BuildError> {
        InstructionBuilder::default().build(&self.state)
    }

    /// Apply one action
    ///
    /// Returns the rating of the word played, or `MoveRating::NoRating` when
    /// the action only opened a space.
    ///
    /// # Errors
    /// Returns `GameError` if the action is not allowed; the state is unchanged.
    pub fn apply(&mut self, action: Action) -> Result<MoveRating, GameError> {
        match action {
            Action::AddSpace(index) => self.play_add(index).map(|()| MoveRating::NoRating),
            Action::Delete(position) => self.play_delete(position),
            Action::Letter { position, letter } => self.play_letter(position, letter),
            Action::ShowNext => self.show_next_move(),
            Action::ShowAll => self.show_unplayed_moves().map(|()| MoveRating::ShownMove),
        }
    }

    /// Open a space before the 0-based `index` of the active word
    ///
    /// # Errors
    /// Returns `GameError` if the game is over, a space is already open, or
    /// `index` is past the end of the word.
    pub fn play_add(&mut self, index: usize) -> Result<(), GameError> {
        self.ensure_playable()?;
        if index > self.state.active_word().len() {
            return Err(GameError::BadPosition(index));
        }
        self.state.add_space(index)
    }

    /// Delete the letter at 1-based `position`
    ///
    /// # Errors
    /// Returns `GameError` if the game is over, a space is open, the position
    /// is out of range, or the shorter word cannot be played.
    pub fn play_delete(&mut self, position: usize) -> Result<MoveRating, GameError> {
        self.ensure_playable()?;
        let active = self.state.active_word();
        let index = to_index(position, active.len())?;
        let word = active.without_letter(index)?;
        self.play_word(word)
    }

    /// Place `letter` at 1-based `position`
    ///
    /// With a space open, `position` must be that space and the letter fills
    /// it. Otherwise the letter replaces the one at `position`.
    ///
    /// # Errors
    /// Returns `GameError` if the position is wrong or the new word cannot be
    /// played.
    pub fn play_letter(&mut self, position: usize, letter: char) -> Result<MoveRating, GameError> {
        if self.state.is_over() {
            return Err(GameError::GameOver);
        }

        let row = &self.state.last_rated_move().word;
        let word = match row.hole_index() {
            Some(hole) if position != hole + 1 => return Err(GameError::BadPosition(position)),
            Some(_) => row.fill(letter)?,
            None => {
                let active = self.state.active_word();
                let index = to_index(position, active.len())?;
                active.with_letter(index, letter)?
            }
        };
        self.play_word(word)
    }

    /// # Errors
    /// Returns `GameError::GameOver` or `GameError::NothingUnplayed`.
    pub fn show_next_move(&mut self) -> Result<MoveRating, GameError> {
        if self.state.is_over() {
            return Err(GameError::GameOver);
        }
        self.state.show_next_move()
    }

    /// # Errors
    /// Returns `GameError::GameOver` if the game already ended.
    pub fn show_unplayed_moves(&mut self) -> Result<(), GameError> {
        if self.state.is_over() {
            return Err(GameError::GameOver);
        }
        self.state.show_unplayed_moves();
        Ok(())
    }

    fn ensure_playable(&self) -> Result<(), GameError> {
        if self.state.is_over() {
            Err(GameError::GameOver)
        } else if self.state.has_pending_hole() {
            Err(GameError::HolePending)
        } else {
            Ok(())
        }
    }

    fn play_word(&mut self, word: Word) -> Result<MoveRating, GameError> {
        let active = self.state.active_word();
        if step(active.text(), word.text()).is_err() {
            return Err(GameError::NotOneStep {
                from: active,
                to: word,
            });
        }
        if !self.finder.is_word(&word) {
            return Err(GameError::NotAWord(word));
        }
        if self.state.is_played(&word) {
            return Err(GameError::Duplicate(word));
        }
        self.state.add_word(word, &self.finder)
    }
}

/// 1-based position to 0-based index within a word of `len` letters
fn to_index(position: usize, len: usize) -> Result<usize, GameError> {
    if (1..=len).contains(&position) {
        Ok(position - 1)
    } else {
        Err(GameError::BadPosition(position))
    }
}
