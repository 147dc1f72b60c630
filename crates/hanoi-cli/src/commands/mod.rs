//! CLI command implementations.

pub mod config;
pub mod play;
pub mod solve;
pub mod version;
