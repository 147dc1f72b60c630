//! The kernel - pure functional core of `Hanoi`.
//!
//! The kernel applies commands to a game and reports what happened as
//! effects. It does no I/O, so front ends decide how to render or log the
//! effects.
//!
//! # Example
//!
//! ```
//! use hanoi_kernel::{Command, Effect, Game, apply_committed};
//! use hanoi_types::{DiskCount, PegId};
//!
//! let mut game = Game::new(DiskCount::new(1).unwrap());
//! let effects = apply_committed(&mut game, Command::move_disk(PegId::A, PegId::C)).unwrap();
//! assert!(matches!(effects.last(), Some(Effect::PuzzleSolved { moves: 1, optimal: true })));
//! ```

use hanoi_types::PegId;
use thiserror::Error;
use tracing::trace;

use crate::command::Command;
use crate::effects::Effect;
use crate::game::{Game, MoveError};

/// Applies a command to the game, returning the effects it produced.
///
/// A rejected command leaves the game exactly as it was.
pub fn apply_committed(game: &mut Game, cmd: Command) -> Result<Vec<Effect>, KernelError> {
    let mut effects = Vec::new();
    trace!(?cmd, moves = game.move_count(), "applying command");

    match cmd {
        Command::Move { from, to } => {
            let was_solved = game.is_solved();
            let disk = game.try_move(from, to)?;

            effects.push(Effect::DiskMoved {
                disk,
                from,
                to,
                move_count: game.move_count(),
            });

            // Only the move that completes the puzzle reports it.
            if game.is_solved() && !was_solved {
                effects.push(solved_effect(game));
            }
        }

        Command::Reset => {
            game.reset();
            effects.push(Effect::GameReset {
                disks: game.disk_count(),
            });
        }

        Command::NewGame { disks } => {
            let target = game.target();
            *game = Game::with_target(disks, target).unwrap_or_else(|| Game::new(disks));
            effects.push(Effect::GameReset { disks });
        }

        Command::AutoSolve => {
            let target = game.target();
            PegId::spare(Game::START, target).ok_or(KernelError::InvalidTarget(target))?;

            // Summarised, not one effect per move: the plan has 2^n - 1 moves.
            let moves = game.solve();
            trace!(moves, "auto-solved");

            effects.push(Effect::GameReset {
                disks: game.disk_count(),
            });
            effects.push(solved_effect(game));
        }
    }

    // Postcondition: ordering and conservation hold after every command
    debug_assert!(game.check_invariants().is_ok());

    Ok(effects)
}

/// Applies a sequence of commands, stopping at the first rejection.
///
/// Effects of the commands applied before the rejection are discarded along
/// with the error, but their state changes remain.
pub fn apply_committed_batch(
    game: &mut Game,
    cmds: impl IntoIterator<Item = Command>,
) -> Result<Vec<Effect>, KernelError> {
    let mut all_effects = Vec::new();
    for cmd in cmds {
        all_effects.extend(apply_committed(game, cmd)?);
    }
    Ok(all_effects)
}

fn solved_effect(game: &Game) -> Effect {
    Effect::PuzzleSolved {
        moves: game.move_count(),
        optimal: game.move_count() == game.disk_count().optimal_moves(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KernelError {
    #[error("illegal move: {0}")]
    IllegalMove(#[from] MoveError),

    #[error("tower {0} cannot be the target, every game starts there")]
    InvalidTarget(PegId),
}
