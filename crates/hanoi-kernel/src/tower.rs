//! A single tower: an ordered stack of disks, bottom to top.

use hanoi_types::{Disk, PegId};
use serde::{Deserialize, Serialize};

/// An ordered stack of disks on one peg.
///
/// The tower itself performs no validation on `push`. The strictly
/// decreasing order (bottom to top) is upheld by [`crate::Game::try_move`],
/// which is the only code path that moves disks between towers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tower {
    peg: PegId,
    disks: Vec<Disk>,
}

impl Tower {
    /// Creates an empty tower on the given peg.
    pub fn new(peg: PegId) -> Self {
        Self {
            peg,
            disks: Vec::new(),
        }
    }

    /// Creates a tower holding `disks`, listed bottom to top.
    pub(crate) fn with_disks(peg: PegId, disks: impl IntoIterator<Item = Disk>) -> Self {
        Self {
            peg,
            disks: disks.into_iter().collect(),
        }
    }

    /// Returns the peg this tower stands on.
    pub fn peg(&self) -> PegId {
        self.peg
    }

    /// Returns the top disk without removing it.
    pub fn top(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    /// Removes and returns the top disk, or `None` if the tower is empty.
    pub fn pop(&mut self) -> Option<Disk> {
        self.disks.pop()
    }

    /// Places `disk` on top. Ordering is the caller's responsibility.
    pub fn push(&mut self, disk: Disk) {
        self.disks.push(disk);
    }

    /// Disks from bottom to top.
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Returns the disk at `level` counted from the bottom (0 = bottom).
    pub fn at_level(&self, level: usize) -> Option<Disk> {
        self.disks.get(level).copied()
    }

    /// Returns the first adjacent pair `(lower, upper)` with `lower <= upper`.
    pub(crate) fn first_unordered_pair(&self) -> Option<(Disk, Disk)> {
        self.disks
            .windows(2)
            .find(|pair| pair[0] <= pair[1])
            .map(|pair| (pair[0], pair[1]))
    }
}
