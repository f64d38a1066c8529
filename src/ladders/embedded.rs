//! Embedded ladder catalogue
//!
//! Ladders compiled into the binary at build time.

// Include generated ladder list from build script
include!(concat!(env!("OUT_DIR"), "/ladders.rs"));
