//! Core domain types for word ladders
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and free of game state.

mod ladder_word;
mod rating;
mod transform;
mod word;

pub use ladder_word::{HOLE_CHAR, LadderWord};
pub use rating::MoveRating;
pub use transform::{EditKind, Step, TransformError, step};
pub use word::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, Word, WordError};
