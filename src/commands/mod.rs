//! Command implementations

pub mod list;
pub mod replay;

pub use list::{ListResult, list_ladders};
pub use replay::{ReplayConfig, ReplayResult, ReplayStep, replay_actions};
