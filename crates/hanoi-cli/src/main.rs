//! Hanoi CLI.
//!
//! Play the Tower of Hanoi in the terminal, or print its optimal solution.
//!
//! # Quick Start
//!
//! ```bash
//! # Play interactively (prompts for the number of disks)
//! hanoi play
//!
//! # Play a 5-disk puzzle straight away
//! hanoi play --disks 5
//!
//! # Print the 7 moves that solve 3 disks
//! hanoi solve --disks 3
//! ```

mod commands;
mod render;
mod style;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use hanoi_config::HanoiConfig;
use hanoi_types::{DiskCount, PegId};
use tracing::debug;

use crate::commands::config::ConfigFormat;
use crate::commands::play::PlayOptions;
use crate::commands::solve::OutputFormat;
use crate::style::Theme;

/// Hanoi - the Tower of Hanoi puzzle in your terminal.
#[derive(Parser)]
#[command(name = "hanoi")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Play interactively.
    Play {
        /// Number of disks (prompted for each round when omitted).
        #[arg(short, long)]
        disks: Option<DiskCount>,

        /// Tower to rebuild the stack on (B or C).
        #[arg(short = 't', long = "to", value_name = "PEG")]
        target: Option<PegId>,
    },

    /// Print the optimal solution.
    Solve {
        /// Number of disks (defaults to game.disks from the configuration).
        #[arg(short, long)]
        disks: Option<DiskCount>,

        /// Tower to rebuild the stack on (B or C).
        #[arg(short = 't', long = "to", value_name = "PEG")]
        target: Option<PegId>,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Only print the move count, not every move.
        #[arg(long)]
        summary: bool,
    },

    /// Configuration commands.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration.
    Show {
        /// Output format.
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigFormat,
    },

    /// Validate configuration files.
    Validate {
        /// Directory holding hanoi.toml.
        #[arg(short, long, default_value = ".")]
        project: PathBuf,

        /// Validate a single TOML file instead of the merged layers.
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Version => commands::version::run(Theme::detect(true, cli.no_color)),
        Commands::Play { disks, target } => {
            let config = load_config()?;
            let theme = Theme::detect(config.display.color, cli.no_color);
            let target = target.unwrap_or(config.game.target);
            if target == PegId::A {
                bail!("Tower A cannot be the target, every game starts there");
            }
            if let Some(disks) = disks {
                if disks.get() > config.game.max_disks {
                    bail!(
                        "{disks} disks exceeds game.max_disks ({})",
                        config.game.max_disks
                    );
                }
            }

            commands::play::run(
                PlayOptions {
                    disks,
                    max_disks: config.game.max_disks,
                    target,
                    block: config.display.block,
                    banner: config.display.banner,
                },
                theme,
            )
        }
        Commands::Solve {
            disks,
            target,
            format,
            summary,
        } => {
            let config = load_config()?;
            let theme = Theme::detect(config.display.color, cli.no_color);
            let disks = match disks {
                Some(disks) => disks,
                None => config.disk_count()?,
            };
            let target = target.unwrap_or(config.game.target);
            commands::solve::run(disks, target, format, summary, theme)
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show { format } => {
                let config = load_config()?;
                let theme = Theme::detect(config.display.color, cli.no_color);
                commands::config::show(&config, format, theme)
            }
            ConfigCommands::Validate { project, file } => commands::config::validate(
                &project,
                file.as_deref(),
                Theme::detect(true, cli.no_color),
            ),
        },
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();
}

fn load_config() -> Result<HanoiConfig> {
    let config = HanoiConfig::load().context("Failed to load configuration")?;
    debug!(?config, "loaded configuration");
    Ok(config)
}
