//! Row-by-row display instructions for a puzzle
//!
//! [`InstructionBuilder`] is rebuilt from scratch after every action; renderers
//! only ever see the resulting [`DisplayInstruction`] list.

mod builder;
mod instruction;

pub use builder::{BuildError, InstructionBuilder, LOG_TARGET};
pub use instruction::{DisplayInstruction, DisplayType};
