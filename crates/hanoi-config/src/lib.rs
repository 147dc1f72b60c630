//! Configuration management for Hanoi
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. CLI arguments (highest precedence, applied by the caller)
//! 2. Environment variables (HANOI_* prefix, `__` between section and key)
//! 3. hanoi.local.toml (gitignored, local overrides)
//! 4. hanoi.toml (project config)
//! 5. ~/.config/hanoi/config.toml (user defaults)
//! 6. Built-in defaults (lowest precedence)

use anyhow::Result;
use hanoi_types::{DiskCount, PegId};
use serde::{Deserialize, Serialize};
use std::path::Path;

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Main Hanoi configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HanoiConfig {
    pub game: GameConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Disk count used when none is given on the command line.
    pub disks: u8,
    /// Largest disk count offered by the interactive prompt.
    pub max_disks: u8,
    /// Tower the puzzle must be rebuilt on.
    pub target: PegId,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            disks: 3,
            max_disks: 7,
            target: PegId::C,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
    pub banner: bool,
    /// Glyph used to draw disks.
    pub block: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            banner: true,
            block: '█',
        }
    }
}

impl HanoiConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Parse a single TOML file on its own, without layering.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let game = &self.game;

        if game.max_disks < DiskCount::MIN || game.max_disks > DiskCount::MAX {
            return Err(ConfigError::Invalid {
                field: "game.max_disks",
                reason: format!(
                    "must be between {} and {}, got {}",
                    DiskCount::MIN,
                    DiskCount::MAX,
                    game.max_disks
                ),
            });
        }

        if game.disks < DiskCount::MIN || game.disks > game.max_disks {
            return Err(ConfigError::Invalid {
                field: "game.disks",
                reason: format!(
                    "must be between {} and {} (game.max_disks), got {}",
                    DiskCount::MIN,
                    game.max_disks,
                    game.disks
                ),
            });
        }

        if game.target == PegId::A {
            return Err(ConfigError::Invalid {
                field: "game.target",
                reason: "cannot be A, every game starts there".to_string(),
            });
        }

        Ok(())
    }

    /// The configured default disk count.
    pub fn disk_count(&self) -> Result<DiskCount, ConfigError> {
        DiskCount::new(self.game.disks).map_err(|e| ConfigError::Invalid {
            field: "game.disks",
            reason: e.to_string(),
        })
    }
}
