//! Interactive TUI: play a ladder one move at a time

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
