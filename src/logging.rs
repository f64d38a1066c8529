//! Logger setup
//!
//! The binary logs through `env_logger`. `RUST_LOG` wins over the verbosity
//! flag when set.

use log::{LevelFilter, Log, Metadata, Record};

/// Initialise `env_logger` for the binary
///
/// `verbosity` counts `-v` flags: 0 shows warnings, 1 info, 2 debug, more trace.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Logger that discards every record
#[derive(Debug, Clone, Copy, Default)]
pub struct Quiet;

impl Log for Quiet {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        false
    }

    fn log(&self, _record: &Record<'_>) {}

    fn flush(&self) {}
}
