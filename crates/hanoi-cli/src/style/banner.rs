//! ASCII art banner for Hanoi.

use std::io::{self, Write};

use super::output::Console;

/// The full Hanoi banner.
const BANNER: &str = r"
      |        |        |
     ===       |        |
    =====      |        |
   =======     |        |
  ---------------------------
   T O W E R   O F   H A N O I
";

/// Writes the full banner with styling.
pub fn print_banner<W: Write>(console: &mut Console<W>) -> io::Result<()> {
    let theme = console.theme();
    console.line(theme.info(BANNER))?;
    console.line(format!("  {}", theme.muted("Rebuild the tower, one disk at a time")))?;
    console.spacer()
}

/// Writes the version banner.
pub fn print_version_banner<W: Write>(console: &mut Console<W>, version: &str) -> io::Result<()> {
    let theme = console.theme();
    console.spacer()?;
    console.line(format!(
        "  {} {} {}",
        theme.info("▲"),
        theme.header("Hanoi"),
        theme.muted(format!("v{version}"))
    ))?;
    console.line(format!("  {}", theme.muted("The Tower of Hanoi puzzle")))?;
    console.spacer()
}
