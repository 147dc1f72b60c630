//! Commands that can be applied to a game.

use hanoi_types::{DiskCount, Move, PegId};
use serde::{Deserialize, Serialize};

/// A command for [`crate::kernel::apply_committed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Move the top disk of `from` onto `to`.
    Move { from: PegId, to: PegId },

    /// Return to the starting position with the same disk count.
    Reset,

    /// Reset, then play the optimal solution.
    AutoSolve,

    /// Replace the game with a fresh one of a different size.
    NewGame { disks: DiskCount },
}

impl Command {
    pub fn move_disk(from: PegId, to: PegId) -> Self {
        Self::Move { from, to }
    }
}

impl From<Move> for Command {
    fn from(mv: Move) -> Self {
        Self::Move {
            from: mv.from,
            to: mv.to,
        }
    }
}
