//! Replay command
//!
//! Plays a list of actions against a puzzle and records the rows after each one.

use crate::core::{MoveRating, Word};
use crate::display::DisplayInstruction;
use crate::game::{Action, Game, GameConfig, GameError, PathFinder, PuzzleState};

/// Configuration for a replay
pub struct ReplayConfig {
    pub start: String,
    pub target: String,
    pub actions: Vec<Action>,
    pub game: GameConfig,
}

impl ReplayConfig {
    #[must_use]
    pub fn new(start: String, target: String, actions: Vec<Action>) -> Self {
        Self {
            start,
            target,
            actions,
            game: GameConfig::default(),
        }
    }
}

/// Result of replaying every action
pub struct ReplayResult {
    /// Rows before the first action
    pub initial: Vec<DisplayInstruction>,
    pub steps: Vec<ReplayStep>,
    pub state: PuzzleState,
}

/// One replayed action
pub struct ReplayStep {
    pub action: Action,
    /// Rating of the move, or why it was refused
    pub outcome: Result<MoveRating, GameError>,
    /// Rows after the action; unchanged when it was refused
    pub rows: Vec<DisplayInstruction>,
}

/// Replay `config.actions` from `config.start` to `config.target`
///
/// Refused actions are recorded and skipped. Actions after the game ends are
/// refused with `GameError::GameOver`.
///
/// # Errors
///
/// Returns an error if:
/// - The start or target word is invalid
/// - No known ladder joins the start and target
/// - A state cannot be turned into rows
pub fn replay_actions<P: PathFinder>(
    config: ReplayConfig,
    finder: P,
) -> Result<ReplayResult, String> {
    let start = Word::new(&config.start).map_err(|e| format!("Invalid start word: {e}"))?;
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;

    let mut game = Game::new(finder, start, target, config.game).map_err(|e| e.to_string())?;
    let initial = game.instructions().map_err(|e| e.to_string())?;

    let mut steps = Vec::with_capacity(config.actions.len());
    for action in config.actions {
        let outcome = game.apply(action);
        if let Err(err) = &outcome {
            log::info!("{action} refused: {err}");
        }
        let rows = game.instructions().map_err(|e| e.to_string())?;
        steps.push(ReplayStep {
            action,
            outcome,
            rows,
        });
    }

    Ok(ReplayResult {
        initial,
        steps,
        state: game.state().clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::KnownLadders;
    use crate::ladders::Ladder;

    fn finder() -> KnownLadders {
        KnownLadders::new(vec![Ladder::parse("corn acorn adorn adore").unwrap()])
    }

    fn actions(texts: &[&str]) -> Vec<Action> {
        texts.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn replay_to_the_target() {
        let config = ReplayConfig::new(
            "corn".to_string(),
            "adore".to_string(),
            actions(&["+0", "1=A", "2=D", "5=E"]),
        );
        let result = replay_actions(config, finder()).unwrap();

        assert_eq!(result.initial.len(), 4);
        assert_eq!(result.steps.len(), 4);
        assert!(result.steps.iter().all(|s| s.outcome.is_ok()));
        assert!(result.state.is_winner());
    }

    #[test]
    fn refused_action_keeps_rows() {
        let config = ReplayConfig::new(
            "corn".to_string(),
            "adore".to_string(),
            actions(&["1=B"]),
        );
        let result = replay_actions(config, finder()).unwrap();

        let step = &result.steps[0];
        assert!(matches!(step.outcome, Err(GameError::NotAWord(_))));
        assert_eq!(step.rows, result.initial);
    }

    #[test]
    fn replay_invalid_words_returns_error() {
        let config = ReplayConfig::new("c0rn".to_string(), "adore".to_string(), vec![]);
        assert!(replay_actions(config, finder()).is_err());

        let config = ReplayConfig::new("corn".to_string(), "pear".to_string(), vec![]);
        assert!(replay_actions(config, finder()).is_err());
    }

    #[test]
    fn replay_respects_max_penalties() {
        let mut config = ReplayConfig::new(
            "corn".to_string(),
            "adore".to_string(),
            actions(&["?", "?", "?"]),
        );
        config.game = GameConfig::new(2);
        let result = replay_actions(config, finder()).unwrap();

        assert!(result.state.is_loser());
        assert_eq!(result.steps[2].outcome, Err(GameError::GameOver));
    }
}
