//! Version command implementation.

use std::io;

use anyhow::Result;

use crate::style::{Console, Theme, banner::print_version_banner};

/// Version information for the CLI.
const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

pub fn run(theme: Theme) -> Result<()> {
    let stdout = io::stdout();
    let mut console = Console::new(stdout.lock(), theme);

    print_version_banner(&mut console, VERSION)?;
    console.labeled("Package", NAME)?;
    console.labeled("Target", std::env::consts::ARCH)?;
    console.labeled("OS", std::env::consts::OS)?;
    console.flush()?;
    Ok(())
}
