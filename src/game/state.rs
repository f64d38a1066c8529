//! Puzzle state: what has been played and what remains
//!
//! The state holds the played words with their ratings (start word first) and
//! the shortest remaining path to the target (target last). Playing a word off
//! the remaining path re-solves from that word, so the remaining path can grow
//! after a wrong move. The only transient state is a pending hole: after the
//! player opens a space in the active word, the played list ends with a copy of
//! that word holding a hole until a letter is chosen.
//!
//! Mutators here do not validate moves; [`super::Game`] does.

use super::error::GameError;
use super::paths::PathFinder;
use crate::core::{LadderWord, MoveRating, Word};
use log::debug;
use std::cmp::Ordering;

/// Default number of penalties that ends the game
pub const DEFAULT_MAX_PENALTIES: usize = 6;

/// Game rule configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Wrong, dodo, and shown moves allowed before the game is lost
    pub max_penalties: usize,
}

impl GameConfig {
    /// At least one penalty is always allowed, so a new puzzle is never lost
    #[must_use]
    pub const fn new(max_penalties: usize) -> Self {
        Self {
            max_penalties: if max_penalties == 0 { 1 } else { max_penalties },
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PENALTIES)
    }
}

/// A played row and its rating
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatedMove {
    pub word: LadderWord,
    pub rating: MoveRating,
}

impl RatedMove {
    #[must_use]
    pub const fn new(word: LadderWord, rating: MoveRating) -> Self {
        Self { word, rating }
    }

    #[must_use]
    pub fn played(word: &Word, rating: MoveRating) -> Self {
        Self::new(LadderWord::plain(word), rating)
    }
}

/// State of one puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    start: Word,
    target: Word,
    /// Path found when the puzzle was created, start and target included
    initial_solution: Vec<Word>,
    /// Never empty: index 0 is the start word
    played: Vec<RatedMove>,
    /// Ends with the target unless the target has been played
    unplayed: Vec<Word>,
    config: GameConfig,
}

impl PuzzleState {
    /// Start a new puzzle from the shortest path between `start` and `target`
    ///
    /// # Errors
    /// Returns `GameError::NoSolution` if no path exists or the words are equal.
    pub fn new<P: PathFinder + ?Sized>(
        start: Word,
        target: Word,
        finder: &P,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        let solution = finder
            .shortest_path(&start, &target)
            .filter(|path| path.len() >= 2)
            .ok_or_else(|| GameError::NoSolution {
                start: start.clone(),
                target: target.clone(),
            })?;

        debug!(
            "new puzzle {start} -> {target}, {} steps",
            solution.len() - 1
        );

        Ok(Self {
            played: vec![RatedMove::played(&start, MoveRating::NoRating)],
            unplayed: solution[1..].to_vec(),
            initial_solution: solution,
            start,
            target,
            config,
        })
    }

    /// Rebuild a state from its parts
    ///
    /// `later_moves` are the rows played after the start word; the start word is
    /// always recorded first, unrated.
    #[must_use]
    pub fn restore(
        initial_solution: Vec<Word>,
        later_moves: Vec<RatedMove>,
        unplayed: Vec<Word>,
        config: GameConfig,
    ) -> Option<Self> {
        let start = initial_solution.first()?.clone();
        let target = initial_solution.last()?.clone();
        let mut played = vec![RatedMove::played(&start, MoveRating::NoRating)];
        played.extend(later_moves);

        Some(Self {
            start,
            target,
            initial_solution,
            played,
            unplayed,
            config,
        })
    }

    // ----- accessors -----

    #[must_use]
    pub const fn start(&self) -> &Word {
        &self.start
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[must_use]
    pub fn initial_solution(&self) -> &[Word] {
        &self.initial_solution
    }

    #[must_use]
    pub fn played_words(&self) -> &[RatedMove] {
        &self.played
    }

    #[must_use]
    pub fn rated_move(&self, i: usize) -> Option<&RatedMove> {
        self.played.get(i)
    }

    #[must_use]
    pub fn last_rated_move(&self) -> &RatedMove {
        &self.played[self.played.len() - 1]
    }

    #[must_use]
    pub fn unplayed_words(&self) -> &[Word] {
        &self.unplayed
    }

    #[must_use]
    pub fn unplayed_word(&self, i: usize) -> Option<&Word> {
        self.unplayed.get(i)
    }

    /// Most recent complete word: the last played row, or the row before it
    /// when the last row holds a pending hole
    #[must_use]
    pub fn active_word(&self) -> Word {
        self.played
            .iter()
            .rev()
            .find_map(|m| m.word.as_word())
            .unwrap_or_else(|| self.start.clone())
    }

    /// Whether the last played row holds a pending hole
    #[must_use]
    pub fn has_pending_hole(&self) -> bool {
        self.last_rated_move().word.has_hole()
    }

    /// Whether `word` already appears as a complete played row
    #[must_use]
    pub fn is_played(&self, word: &Word) -> bool {
        self.played
            .iter()
            .any(|m| m.word.as_word().as_ref() == Some(word))
    }

    // ----- play -----

    /// Open a space before the 0-based `index` of the active word
    ///
    /// # Errors
    /// Returns `GameError::InvalidWord` if the index is past the end or the
    /// word is already as long as allowed.
    pub fn add_space(&mut self, index: usize) -> Result<(), GameError> {
        let row = LadderWord::with_hole(&self.active_word(), index)?;
        debug!("opening space: {row}");
        self.played.push(RatedMove::new(row, MoveRating::NoRating));
        Ok(())
    }

    /// Play `word` and rate it against the remaining path
    ///
    /// A pending hole row is replaced by `word`. Playing the next word of the
    /// remaining path is always a good move; any other word re-solves from
    /// `word`, and the rating reflects how the remaining length changed.
    ///
    /// # Errors
    /// Returns `GameError::DeadEnd` if no path leads from `word` to the target.
    pub fn add_word<P: PathFinder + ?Sized>(
        &mut self,
        word: Word,
        finder: &P,
    ) -> Result<MoveRating, GameError> {
        let (rating, remaining) = if self.unplayed.first() == Some(&word) {
            (MoveRating::GoodMove, self.unplayed[1..].to_vec())
        } else {
            let path = finder
                .shortest_path(&word, &self.target)
                .ok_or_else(|| GameError::DeadEnd(word.clone()))?;
            let rating = rate(self.unplayed.len(), path.len(), finder.is_common(&word));
            debug!(
                "{word} was not expected; re-solved {} remaining words, was {}",
                path.len(),
                self.unplayed.len()
            );
            (rating, path[1..].to_vec())
        };

        if self.has_pending_hole() {
            self.played.pop();
        }
        debug!("played {word} ({rating})");
        self.played.push(RatedMove::played(&word, rating));
        self.unplayed = remaining;
        Ok(rating)
    }

    /// Reveal the next word of the remaining path
    ///
    /// # Errors
    /// Returns `GameError::NothingUnplayed` if the target has been played.
    pub fn show_next_move(&mut self) -> Result<MoveRating, GameError> {
        if self.unplayed.is_empty() {
            return Err(GameError::NothingUnplayed);
        }
        if self.has_pending_hole() {
            self.played.pop();
        }
        let word = self.unplayed.remove(0);
        debug!("showing {word}");
        self.played
            .push(RatedMove::played(&word, MoveRating::ShownMove));
        Ok(MoveRating::ShownMove)
    }

    /// Reveal every remaining word
    pub fn show_unplayed_moves(&mut self) {
        while self.show_next_move().is_ok() {}
    }

    // ----- end of game -----

    /// Wrong, dodo, and shown moves, capped at the configured maximum
    #[must_use]
    pub fn num_penalties(&self) -> usize {
        self.played
            .iter()
            .filter(|m| m.rating.is_penalty())
            .count()
            .min(self.config.max_penalties)
    }

    #[must_use]
    pub fn is_loser(&self) -> bool {
        self.num_penalties() >= self.config.max_penalties
    }

    /// The target has been played or too many penalties were taken
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.reached_target() || self.is_loser()
    }

    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.is_over() && !self.is_loser()
    }

    /// Whether the last played row is the target
    #[must_use]
    pub fn reached_target(&self) -> bool {
        self.last_rated_move().word.as_word().as_ref() == Some(&self.target)
    }

    /// Extra steps taken compared with the initial solution
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn steps_over_par(&self) -> isize {
        let played = self.played.iter().filter(|m| !m.word.has_hole()).count();
        let total = played + self.unplayed.len();
        total as isize - self.initial_solution.len() as isize
    }
}

/// Rate a word that left the remaining path
///
/// `remaining` counts the words that were left to play; `new_path` counts the
/// re-solved path including the word just played.
fn rate(remaining: usize, new_path: usize, is_common: bool) -> MoveRating {
    match new_path.cmp(&remaining) {
        Ordering::Less => MoveRating::GeniusMove,
        Ordering::Equal if is_common => MoveRating::GoodMove,
        Ordering::Equal => MoveRating::ScrabbleMove,
        Ordering::Greater if new_path == remaining + 1 => MoveRating::WrongMove,
        Ordering::Greater => MoveRating::DodoMove,
    }
}
