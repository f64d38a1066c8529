//! Terminal output formatting
//!
//! Coloured rendering of instruction rows and command results.

pub mod display;
pub mod formatters;

pub use display::{print_game_status, print_instructions, print_ladders, print_replay_result};
