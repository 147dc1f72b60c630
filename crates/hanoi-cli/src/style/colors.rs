//! Semantic color palette for terminal output.
//!
//! Uses owo-colors for zero-allocation terminal coloring.

use std::fmt::Display;
use std::io::IsTerminal;

use owo_colors::{OwoColorize, Style};

/// Returns the style for success messages (green bold).
pub fn success_style() -> Style {
    Style::new().green().bold()
}

/// Returns the style for error messages (red bold).
pub fn error_style() -> Style {
    Style::new().red().bold()
}

/// Returns the style for warning messages (yellow).
pub fn warning_style() -> Style {
    Style::new().yellow()
}

/// Returns the style for informational messages (cyan).
pub fn info_style() -> Style {
    Style::new().cyan()
}

/// Returns the style for muted/secondary text (dimmed).
pub fn muted_style() -> Style {
    Style::new().dimmed()
}

/// Returns the style for headers (bold).
pub fn header_style() -> Style {
    Style::new().bold()
}

/// Returns the style for disks, cycling through a few colors by size.
pub fn disk_style(size: u8) -> Style {
    match size % 6 {
        1 => Style::new().red(),
        2 => Style::new().yellow(),
        3 => Style::new().green(),
        4 => Style::new().cyan(),
        5 => Style::new().blue(),
        _ => Style::new().magenta(),
    }
}

/// Whether output is colored, plus the semantic helpers that honour it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    color: bool,
}

impl Theme {
    /// A theme that never emits escape codes.
    pub const PLAIN: Theme = Theme { color: false };

    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Colors only if the config allows it, `--no-color` was not given,
    /// `NO_COLOR` is unset, and stdout is a terminal.
    pub fn detect(config_color: bool, no_color_flag: bool) -> Self {
        let env_no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::new(
            config_color && !no_color_flag && !env_no_color && std::io::stdout().is_terminal(),
        )
    }

    pub fn is_colored(self) -> bool {
        self.color
    }

    /// Applies `style` when color is enabled.
    pub fn paint(self, text: impl Display, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    /// Apply success styling (green bold).
    pub fn success(self, text: impl Display) -> String {
        self.paint(text, success_style())
    }

    /// Apply error styling (red bold).
    pub fn error(self, text: impl Display) -> String {
        self.paint(text, error_style())
    }

    /// Apply warning styling (yellow).
    pub fn warning(self, text: impl Display) -> String {
        self.paint(text, warning_style())
    }

    /// Apply info styling (cyan).
    pub fn info(self, text: impl Display) -> String {
        self.paint(text, info_style())
    }

    /// Apply muted styling (dimmed).
    pub fn muted(self, text: impl Display) -> String {
        self.paint(text, muted_style())
    }

    /// Apply header styling (bold).
    pub fn header(self, text: impl Display) -> String {
        self.paint(text, header_style())
    }

    /// Apply the per-size disk color.
    pub fn disk(self, text: impl Display, size: u8) -> String {
        self.paint(text, disk_style(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_passes_text_through() {
        assert_eq!(Theme::PLAIN.success("ok"), "ok");
        assert_eq!(Theme::PLAIN.disk("███", 1), "███");
    }

    #[test]
    fn colored_theme_adds_escape_codes() {
        let painted = Theme::new(true).error("boom");
        assert!(painted.contains("boom"));
        assert!(painted.contains('\u{1b}'));
    }

    #[test]
    fn no_color_flag_wins() {
        assert!(!Theme::detect(true, true).is_colored());
        assert!(!Theme::detect(false, false).is_colored());
    }
}
