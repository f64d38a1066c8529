//! Build the display instructions for a puzzle state
//!
//! The builder classifies every word of the ladder, in order from start to
//! target, into one [`DisplayType`]. It reads the state and never changes it,
//! so building twice from the same state gives the same rows.
//!
//! Row order:
//! 1. every played word but the last, as `Played`
//! 2. the active word: `WordAfterAdd` while a space is open, otherwise
//!    `PlayedAdd`, `PlayedDelete` or `PlayedChange` depending on the edit that
//!    leads to the next word; a change is followed by a `WordAfterChange`
//!    preview of that next word
//! 3. `Future` rows for the rest of the remaining path
//! 4. the target
//!
//! The first row is flagged as the start word, and the row where the initial
//! solution reached the target carries the par line.

use super::instruction::{DisplayInstruction, DisplayType};
use crate::core::{EditKind, LadderWord, MoveRating, TransformError, Word, WordError, step};
use crate::game::PuzzleState;
use log::{Level, Log, Metadata, Record};
use std::fmt;

/// Log target for classification records
pub const LOG_TARGET: &str = "wordchain::display";

/// The state does not form a connected ladder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Two words expected to be one edit apart are not
    NotAdjacent(TransformError),
    /// The target has not been played but nothing remains to play
    NoRemainingPath { last: String },
    /// A preview row could not be formed
    InvalidRow(WordError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAdjacent(err) => write!(f, "Broken ladder: {err}"),
            Self::NoRemainingPath { last } => {
                write!(f, "Broken ladder: nothing left to play after '{last}'")
            }
            Self::InvalidRow(err) => write!(f, "Invalid row: {err}"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotAdjacent(err) => Some(err),
            Self::InvalidRow(err) => Some(err),
            Self::NoRemainingPath { .. } => None,
        }
    }
}

impl From<TransformError> for BuildError {
    fn from(err: TransformError) -> Self {
        Self::NotAdjacent(err)
    }
}

impl From<WordError> for BuildError {
    fn from(err: WordError) -> Self {
        Self::InvalidRow(err)
    }
}

/// Turns a [`PuzzleState`] into rows
///
/// Decisions are logged at debug level under [`LOG_TARGET`] to the logger the
/// builder was given, the global logger by default.
#[derive(Clone, Copy)]
pub struct InstructionBuilder<'a> {
    logger: &'a dyn Log,
}

impl Default for InstructionBuilder<'static> {
    fn default() -> Self {
        Self {
            logger: log::logger(),
        }
    }
}

impl fmt::Debug for InstructionBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstructionBuilder").finish_non_exhaustive()
    }
}

impl<'a> InstructionBuilder<'a> {
    /// Builder that logs to `logger` instead of the global logger
    #[must_use]
    pub const fn with_logger(logger: &'a dyn Log) -> Self {
        Self { logger }
    }

    /// Rows for `state`, start first
    ///
    /// # Errors
    /// Returns `BuildError` if adjacent words in the state are not one edit
    /// apart, or if the target was not played and no words remain.
    ///
    /// # Examples
    /// ```
    /// use wordchain::core::Word;
    /// use wordchain::display::{DisplayType, InstructionBuilder};
    /// use wordchain::game::{GameConfig, KnownLadders, PuzzleState};
    /// use wordchain::ladders::Ladder;
    ///
    /// let finder = KnownLadders::new(vec![Ladder::parse("corn acorn adorn adore").unwrap()]);
    /// let start = Word::new("corn").unwrap();
    /// let target = Word::new("adore").unwrap();
    /// let state = PuzzleState::new(start, target, &finder, GameConfig::default()).unwrap();
    ///
    /// let rows = InstructionBuilder::default().build(&state).unwrap();
    /// let types: Vec<DisplayType> = rows.iter().map(|r| r.display_type).collect();
    /// assert_eq!(
    ///     types,
    ///     [DisplayType::PlayedAdd, DisplayType::Future, DisplayType::Future, DisplayType::Target]
    /// );
    /// ```
    pub fn build(&self, state: &PuzzleState) -> Result<Vec<DisplayInstruction>, BuildError> {
        let played = state.played_words();
        let unplayed = state.unplayed_words();
        let active = state.last_rated_move();
        let over = state.is_over();

        let mut rows: Vec<DisplayInstruction> = played[..played.len() - 1]
            .iter()
            .map(|m| {
                DisplayInstruction::new(m.word.clone(), DisplayType::Played, 0, m.rating)
            })
            .collect();

        let mut skip = 0;
        if !state.reached_target() {
            if unplayed.is_empty() {
                return Err(BuildError::NoRemainingPath {
                    last: active.word.to_string(),
                });
            }

            if over {
                self.trace(format_args!("{}: lost, shown as played", active.word));
                rows.push(DisplayInstruction::new(
                    active.word.clone(),
                    DisplayType::Played,
                    0,
                    active.rating,
                ));
            } else if active.word.has_hole() {
                let position = next_change(unplayed, 0)?;
                self.trace(format_args!(
                    "{}: space open, next change at {position}",
                    active.word
                ));
                rows.push(DisplayInstruction::new(
                    active.word.clone(),
                    DisplayType::WordAfterAdd,
                    position,
                    active.rating,
                ));
                skip = 1;
            } else {
                skip = self.push_active(&mut rows, &state.active_word(), active.rating, unplayed)?;
            }

            for i in skip..unplayed.len() - 1 {
                let position = next_change(unplayed, i)?;
                rows.push(DisplayInstruction::new(
                    LadderWord::plain(&unplayed[i]),
                    DisplayType::Future,
                    position,
                    MoveRating::NoRating,
                ));
            }
        }

        if skip < unplayed.len() || state.reached_target() {
            let rating = if over && !state.is_winner() {
                MoveRating::WrongMove
            } else {
                MoveRating::GoodMove
            };
            self.trace(format_args!("{}: target, {rating}", state.target()));
            rows.push(DisplayInstruction::new(
                LadderWord::plain(state.target()),
                DisplayType::Target,
                0,
                rating,
            ));
        }

        Ok(self.mark_rows(rows, state.initial_solution().len()))
    }

    /// Push the active word and, for a change, the preview of the next word
    ///
    /// Returns how many remaining words the pushed rows stand in for.
    fn push_active(
        &self,
        rows: &mut Vec<DisplayInstruction>,
        word: &Word,
        rating: MoveRating,
        unplayed: &[Word],
    ) -> Result<usize, BuildError> {
        let next = &unplayed[0];
        let edit = step(word.text(), next.text())?;
        let row = LadderWord::plain(word);

        let (display_type, position) = match edit.kind {
            EditKind::Add => (DisplayType::PlayedAdd, 0),
            EditKind::Delete => (DisplayType::PlayedDelete, 0),
            EditKind::Change => (DisplayType::PlayedChange, edit.position),
        };
        self.trace(format_args!(
            "{word}: {display_type} toward {next} at {}",
            edit.position
        ));
        rows.push(DisplayInstruction::new(row, display_type, position, rating));

        if edit.kind != EditKind::Change {
            return Ok(0);
        }

        let preview = LadderWord::blanked(next, edit.position - 1)?;
        let position = next_change(unplayed, 0)?;
        self.trace(format_args!("{preview}: preview, next change at {position}"));
        rows.push(DisplayInstruction::new(
            preview,
            DisplayType::WordAfterChange,
            position,
            MoveRating::NoRating,
        ));
        Ok(1)
    }

    fn mark_rows(
        &self,
        mut rows: Vec<DisplayInstruction>,
        solution_len: usize,
    ) -> Vec<DisplayInstruction> {
        if let Some(first) = rows.first_mut() {
            first.is_start_word = true;
        }
        let par = solution_len.saturating_sub(1).min(rows.len().saturating_sub(1));
        if let Some(row) = rows.get_mut(par) {
            row.show_par_line = true;
            self.trace(format_args!("par line after row {par} ({})", row.word));
        }
        rows
    }

    fn trace(&self, args: fmt::Arguments<'_>) {
        let metadata = Metadata::builder()
            .level(Level::Debug)
            .target(LOG_TARGET)
            .build();
        if !self.logger.enabled(&metadata) {
            return;
        }
        self.logger.log(
            &Record::builder()
                .metadata(metadata)
                .args(args)
                .module_path(Some(module_path!()))
                .file(Some(file!()))
                .line(Some(line!()))
                .build(),
        );
    }
}

/// Change position from `unplayed[i]` to the word after it, 0 when there is
/// none or the edit is an add or delete
fn next_change(unplayed: &[Word], i: usize) -> Result<usize, BuildError> {
    match (unplayed.get(i), unplayed.get(i + 1)) {
        (Some(from), Some(to)) => Ok(step(from.text(), to.text())?.change_position()),
        _ => Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, KnownLadders, RatedMove};
    use crate::ladders::Ladder;
    use crate::logging::Quiet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| word(t)).collect()
    }

    fn finder() -> KnownLadders {
        KnownLadders::new(vec![
            Ladder::parse("corn acorn adorn adore").unwrap(),
            Ladder::parse("hard heard hear pear").unwrap(),
        ])
    }

    fn build(state: &PuzzleState) -> Vec<DisplayInstruction> {
        InstructionBuilder::with_logger(&Quiet).build(state).unwrap()
    }

    fn summary(rows: &[DisplayInstruction]) -> Vec<String> {
        rows.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn fresh_add_puzzle() {
        let state =
            PuzzleState::new(word("corn"), word("adore"), &finder(), GameConfig::default()).unwrap();
        assert_eq!(
            summary(&build(&state)),
            [
                "(add,word:CORN,start)",
                "(future,word:ACORN,changePosition:2)",
                "(future,word:ADORN,changePosition:5)",
                "(target,word:ADORE,moveRating:good,par)",
            ]
        );
    }

    #[test]
    fn played_rows_keep_their_ratings() {
        let state = PuzzleState::restore(
            words(&["fate", "fat", "sat", "sap", "sop"]),
            vec![
                RatedMove::played(&word("fat"), MoveRating::GeniusMove),
                RatedMove::played(&word("sat"), MoveRating::ScrabbleMove),
                RatedMove::played(&word("sag"), MoveRating::DodoMove),
                RatedMove::played(&word("sap"), MoveRating::GoodMove),
            ],
            words(&["sop"]),
            GameConfig::default(),
        )
        .unwrap();
        assert!(!state.is_over());

        assert_eq!(
            summary(&build(&state)),
            [
                "(played,word:FATE,start)",
                "(played,word:FAT,moveRating:genius)",
                "(played,word:SAT,moveRating:scrabble)",
                "(played,word:SAG,moveRating:dodo)",
                "(change,word:SAP,changePosition:2,moveRating:good,par)",
                "(after-change,word:S?P)",
            ]
        );
    }

    #[test]
    fn delete_step_has_no_position() {
        let mut state =
            PuzzleState::new(word("hard"), word("pear"), &finder(), GameConfig::default()).unwrap();
        state.add_word(word("heard"), &finder()).unwrap();
        let rows = build(&state);

        assert_eq!(rows[1].display_type, DisplayType::PlayedDelete);
        assert_eq!(rows[1].change_position, 0);
        assert_eq!(rows[1].move_rating, MoveRating::GoodMove);
        assert_eq!(rows[2].display_type, DisplayType::Future);
        assert_eq!(rows[2].change_position, 1);
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn space_at_end_of_word() {
        let mut state =
            PuzzleState::new(word("hear"), word("heard"), &finder(), GameConfig::default())
                .unwrap();
        state.add_space(4).unwrap();
        let rows = build(&state);

        assert_eq!(
            summary(&rows),
            ["(played,word:HEAR,start)", "(after-add,word:HEAR?,par)"]
        );
    }

    #[test]
    fn lost_game_shows_active_as_played() {
        let mut state =
            PuzzleState::new(word("corn"), word("adore"), &finder(), GameConfig::new(1)).unwrap();
        state.show_next_move().unwrap();
        assert!(state.is_loser());
        let rows = build(&state);

        assert_eq!(
            summary(&rows),
            [
                "(played,word:CORN,start)",
                "(played,word:ACORN,moveRating:shown)",
                "(future,word:ADORN,changePosition:5)",
                "(target,word:ADORE,moveRating:wrong,par)",
            ]
        );
        assert!(rows.iter().all(|r| !r.display_type.is_active()));
    }

    #[test]
    fn par_line_clamps_to_last_row() {
        let state = PuzzleState::restore(
            words(&["corn", "acorn", "adorn", "adore"]),
            vec![RatedMove::played(&word("adore"), MoveRating::GeniusMove)],
            vec![],
            GameConfig::default(),
        )
        .unwrap();
        let rows = build(&state);

        assert_eq!(rows.len(), 2);
        assert!(rows[1].show_par_line);
        assert_eq!(rows.iter().filter(|r| r.show_par_line).count(), 1);
    }

    #[test]
    fn broken_remaining_path_is_an_error() {
        let state = PuzzleState::restore(
            words(&["corn", "acorn", "adorn", "adore"]),
            vec![],
            words(&["adorn", "adore"]),
            GameConfig::default(),
        )
        .unwrap();
        let err = InstructionBuilder::with_logger(&Quiet)
            .build(&state)
            .unwrap_err();
        assert!(matches!(err, BuildError::NotAdjacent(_)));
    }

    #[test]
    fn empty_remaining_path_is_an_error() {
        let state = PuzzleState::restore(
            words(&["corn", "acorn", "adorn", "adore"]),
            vec![],
            vec![],
            GameConfig::default(),
        )
        .unwrap();
        let err = InstructionBuilder::with_logger(&Quiet)
            .build(&state)
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::NoRemainingPath {
                last: "CORN".to_string()
            }
        );
    }

    struct Counting(AtomicUsize);

    impl Log for Counting {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            metadata.target() == LOG_TARGET
        }

        fn log(&self, _record: &Record<'_>) {
            self.0.fetch_add(1, Ordering::Relaxed);
        }

        fn flush(&self) {}
    }

    #[test]
    fn decisions_go_to_injected_logger() {
        let logger = Counting(AtomicUsize::new(0));
        let state =
            PuzzleState::new(word("corn"), word("adore"), &finder(), GameConfig::default()).unwrap();
        InstructionBuilder::with_logger(&logger).build(&state).unwrap();
        assert!(logger.0.load(Ordering::Relaxed) > 0);
    }
}
