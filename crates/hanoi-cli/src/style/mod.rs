//! CLI styling utilities for terminal output.
//!
//! Provides a semantic color theme, a console wrapper with message helpers,
//! the banner, and formatted tables. Whether color is on travels with the
//! [`Theme`] value rather than living in a global.

pub mod banner;
pub mod colors;
pub mod output;
pub mod table;

pub use colors::Theme;
pub use output::Console;
