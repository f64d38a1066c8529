//! Game rules: puzzle state, move rating, and validated actions

mod error;
mod paths;
mod play;
mod state;

pub use error::GameError;
pub use paths::{KnownLadders, PathFinder};
pub use play::{Action, ActionParseError, Game};
pub use state::{DEFAULT_MAX_PENALTIES, GameConfig, PuzzleState, RatedMove};
