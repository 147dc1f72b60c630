//! Effects produced by the kernel.
//!
//! Effects describe what happened so the caller can render or log it. The
//! kernel produces them but never acts on them.

use hanoi_types::{Disk, DiskCount, PegId};
use serde::{Deserialize, Serialize};

/// An observable outcome of applying a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// A disk was relocated.
    DiskMoved {
        disk: Disk,
        from: PegId,
        to: PegId,
        /// Move counter after this move.
        move_count: u64,
    },

    /// The game returned to its starting position.
    GameReset { disks: DiskCount },

    /// The last move put every disk on the target tower.
    PuzzleSolved {
        moves: u64,
        /// True if `moves` equals `2^n - 1`.
        optimal: bool,
    },
}
