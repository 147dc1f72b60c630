//! One-shot solver: prints the optimal move list.

use std::io;

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use hanoi_kernel::{Game, Solution};
use hanoi_types::{Disk, DiskCount, PegId};
use serde::Serialize;
use tracing::debug;

use crate::style::{
    Console, Theme,
    table::{info_table, result_table},
};

/// Largest puzzle whose full move list is printed (about a million moves).
pub const MAX_LISTED_DISKS: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// One row of the solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    pub step: u64,
    pub disk: Disk,
    pub from: PegId,
    pub to: PegId,
}

#[derive(Debug, Serialize)]
struct Listing {
    disks: DiskCount,
    source: PegId,
    target: PegId,
    total: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<Vec<Step>>,
}

/// Plays the optimal plan on a fresh game, recording which disk each move carries.
pub fn steps(disks: DiskCount, target: PegId) -> Result<Vec<Step>> {
    let mut game = Game::with_target(disks, target)
        .with_context(|| format!("Tower {target} cannot be the target"))?;
    let auxiliary = PegId::spare(Game::START, target)
        .with_context(|| format!("Tower {target} cannot be the target"))?;

    Solution::new(disks, Game::START, auxiliary, target)
        .map(|mv| {
            let disk = game
                .apply(mv)
                .with_context(|| format!("Solver produced an illegal move {mv}"))?;
            Ok(Step {
                step: game.move_count(),
                disk,
                from: mv.from,
                to: mv.to,
            })
        })
        .collect()
}

pub fn run(
    disks: DiskCount,
    target: PegId,
    format: OutputFormat,
    summary_only: bool,
    theme: Theme,
) -> Result<()> {
    let total = disks.optimal_moves();

    if !summary_only && disks.get() > MAX_LISTED_DISKS {
        bail!(
            "Listing {disks} disks would print {total} moves. Use --summary, or at most {MAX_LISTED_DISKS} disks."
        );
    }

    let steps = if summary_only {
        None
    } else {
        Some(steps(disks, target)?)
    };
    debug!(disks = disks.get(), %target, total, "computed solution");

    let stdout = io::stdout();
    let mut console = Console::new(stdout.lock(), theme);

    match format {
        OutputFormat::Json => {
            let listing = Listing {
                disks,
                source: Game::START,
                target,
                total,
                steps,
            };
            console.line(serde_json::to_string_pretty(&listing)?)?;
        }
        OutputFormat::Text => {
            if let Some(steps) = &steps {
                let rows: Vec<Vec<String>> = steps
                    .iter()
                    .map(|s| {
                        vec![
                            s.step.to_string(),
                            s.disk.to_string(),
                            s.from.to_string(),
                            s.to.to_string(),
                        ]
                    })
                    .collect();
                console.line(result_table(theme, &["Step", "Disk", "From", "To"], &rows))?;
            }
            console.line(info_table(
                theme,
                &[
                    ("Disks", disks.to_string()),
                    ("From", Game::START.to_string()),
                    ("To", target.to_string()),
                    ("Moves (2^n - 1)", total.to_string()),
                ],
            ))?;
        }
    }

    console.flush()?;
    Ok(())
}
