//! Word Chain
//!
//! A word-ladder puzzle: turn a start word into a target word one letter at a
//! time, adding, deleting, or changing a single letter per move. After every
//! move the puzzle is redrawn from a list of display instructions, one per row.
//!
//! # Quick Start
//!
//! ```rust
//! use wordchain::core::Word;
//! use wordchain::display::DisplayType;
//! use wordchain::game::{Action, Game, GameConfig, KnownLadders};
//! use wordchain::ladders::Ladder;
//!
//! let finder = KnownLadders::new(vec![Ladder::parse("corn acorn adorn adore").unwrap()]);
//! let start = Word::new("corn").unwrap();
//! let target = Word::new("adore").unwrap();
//! let mut game = Game::new(finder, start, target, GameConfig::default()).unwrap();
//!
//! // Open a space in front of CORN, then fill it with A
//! game.apply(Action::AddSpace(0)).unwrap();
//! game.apply(Action::Letter { position: 1, letter: 'A' }).unwrap();
//!
//! let rows = game.instructions().unwrap();
//! assert_eq!(rows[1].display_type, DisplayType::PlayedChange);
//! assert_eq!(rows[2].word.to_string(), "A?ORN");
//! ```

// Core domain types
pub mod core;

// Display instructions and the builder
pub mod display;

// Game rules and player actions
pub mod game;

// Ladder catalogue
pub mod ladders;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
