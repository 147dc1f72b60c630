//! Configuration management commands.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use hanoi_config::{HanoiConfig, Paths};

use crate::style::{Console, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Text,
    Toml,
    Json,
}

/// Show the effective configuration after all layers are merged.
pub fn show(config: &HanoiConfig, format: ConfigFormat, theme: Theme) -> Result<()> {
    let stdout = io::stdout();
    let mut console = Console::new(stdout.lock(), theme);

    match format {
        ConfigFormat::Json => {
            console.line(serde_json::to_string_pretty(config)?)?;
        }
        ConfigFormat::Toml => {
            console.line(toml::to_string_pretty(config)?)?;
        }
        ConfigFormat::Text => {
            console.line(theme.header("Hanoi Configuration"))?;
            console.line("===================")?;
            console.spacer()?;

            console.line("Game:")?;
            console.labeled("Disks", config.game.disks)?;
            console.labeled("Max disks", config.game.max_disks)?;
            console.labeled("Target", config.game.target)?;
            console.spacer()?;

            console.line("Display:")?;
            console.labeled("Color", config.display.color)?;
            console.labeled("Banner", config.display.banner)?;
            console.labeled("Block", config.display.block)?;
        }
    }

    console.flush()?;
    Ok(())
}

/// Validate either a single file or the merged configuration of `project`.
pub fn validate(project: &Path, file: Option<&Path>, theme: Theme) -> Result<()> {
    let stdout = io::stdout();
    let mut console = Console::new(stdout.lock(), theme);

    let result = match file {
        Some(path) => {
            console.line(format!("Validating {}...", path.display()))?;
            HanoiConfig::from_toml_file(path)
                .and_then(|config| config.validate())
                .with_context(|| format!("{} is not a valid configuration", path.display()))
        }
        None => {
            console.line(format!(
                "Validating configuration in {}...",
                project.display()
            ))?;
            if !Paths::has_project_config(project) {
                console.warn("No hanoi.toml found, checking defaults and environment only")?;
            }
            HanoiConfig::load_from_dir(project).map(|_| ())
        }
    };

    match result {
        Ok(()) => {
            console.success("Configuration is valid")?;
            Ok(())
        }
        Err(e) => {
            console.error("Configuration validation failed")?;
            Err(e)
        }
    }
}
