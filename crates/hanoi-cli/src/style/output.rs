//! Output helpers for consistent styled messages.

use std::fmt::Display;
use std::io::{self, Write};

use super::colors::Theme;

/// A writer paired with the theme used to style everything written to it.
pub struct Console<W> {
    out: W,
    theme: Theme,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, theme: Theme) -> Self {
        Self { out, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Writes a line as-is.
    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Writes an empty line for spacing.
    pub fn spacer(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Writes a prompt without a newline and flushes it.
    pub fn prompt(&mut self, text: impl Display) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    /// Writes a success message with a checkmark.
    pub fn success(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.out, "{} {msg}", self.theme.success("✓"))
    }

    /// Writes an error message with an X mark.
    pub fn error(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.out, "{} {msg}", self.theme.error("✗"))
    }

    /// Writes a warning message with a warning symbol.
    pub fn warn(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.out, "{} {msg}", self.theme.warning("⚠"))
    }

    /// Writes a hint/suggestion with an arrow.
    pub fn hint(&mut self, msg: impl Display) -> io::Result<()> {
        let msg = msg.to_string();
        writeln!(self.out, "{} {}", self.theme.muted("→"), self.theme.muted(msg))
    }

    /// Writes a labeled key-value pair with indentation.
    pub fn labeled(&mut self, key: &str, value: impl Display) -> io::Result<()> {
        writeln!(self.out, "  {}: {value}", self.theme.muted(key))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_console_writes_symbols_and_text() {
        let mut console = Console::new(Vec::new(), Theme::PLAIN);
        console.success("done").unwrap();
        console.error("nope").unwrap();
        console.labeled("Moves", 7).unwrap();
        console.prompt("> ").unwrap();

        let text = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(text, "✓ done\n✗ nope\n  Moves: 7\n> ");
    }
}
