//! Game state: three towers, a move counter, and the move executor.
//!
//! [`Game::try_move`] is the only mutator of tower contents. Every other
//! method is a read-only query, except [`Game::solve`] and [`Game::reset`]
//! which are built on top of it.

use hanoi_types::{Disk, DiskCount, Move, PegId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::solver;
use crate::tower::Tower;

// ============================================================================
// Errors
// ============================================================================

/// Why a requested move was rejected. The game is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("cannot move tower {0} onto itself")]
    SamePeg(PegId),

    #[error("tower {0} is empty")]
    EmptySource(PegId),

    #[error("disk {disk} cannot be placed on smaller disk {onto} (tower {to})")]
    LargerOnSmaller { disk: Disk, onto: Disk, to: PegId },
}

/// A broken structural invariant. Only reachable through bugs or hand-built state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("tower {peg}: disk {upper} sits on disk {lower}")]
    Unordered { peg: PegId, lower: Disk, upper: Disk },

    #[error("disk {0} is not on any tower")]
    DiskMissing(Disk),

    #[error("disk {0} appears more than once")]
    DiskDuplicated(Disk),

    #[error("disk {disk} exceeds the puzzle size {count}")]
    UnknownDisk { disk: Disk, count: DiskCount },
}

/// Why a serialized game was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("tower {0} cannot be the target, every game starts there")]
    StartAsTarget(PegId),

    #[error("slot {slot} holds tower {found}")]
    MisplacedTower { slot: PegId, found: PegId },

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

// ============================================================================
// Game
// ============================================================================

/// A puzzle in progress.
///
/// Deserialization goes through [`GameSnapshot`] and rejects any position
/// that breaks ordering or conservation, so a loaded game is as trustworthy
/// as one built by [`Game::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot")]
pub struct Game {
    towers: [Tower; 3],
    disk_count: DiskCount,
    target: PegId,
    move_count: u64,
}

impl Game {
    /// The peg every game starts on.
    pub const START: PegId = PegId::A;

    /// Creates a game with all disks stacked on tower `A` and target `C`.
    pub fn new(disk_count: DiskCount) -> Self {
        Self::starting_position(disk_count, PegId::C)
    }

    /// Creates a game that is won on `target` instead of `C`.
    ///
    /// Returns `None` if `target` is the starting tower, which would make
    /// the puzzle solved before any move.
    pub fn with_target(disk_count: DiskCount, target: PegId) -> Option<Self> {
        if target == Self::START {
            return None;
        }
        Some(Self::starting_position(disk_count, target))
    }

    fn starting_position(disk_count: DiskCount, target: PegId) -> Self {
        Self {
            towers: [
                Tower::with_disks(PegId::A, disk_count.disks_descending()),
                Tower::new(PegId::B),
                Tower::new(PegId::C),
            ],
            disk_count,
            target,
            move_count: 0,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns the tower standing on `peg`.
    pub fn tower(&self, peg: PegId) -> &Tower {
        &self.towers[peg.index()]
    }

    /// All three towers, `A` to `C`.
    pub fn towers(&self) -> &[Tower; 3] {
        &self.towers
    }

    pub fn disk_count(&self) -> DiskCount {
        self.disk_count
    }

    pub fn target(&self) -> PegId {
        self.target
    }

    /// Number of successful moves since the game started or was reset.
    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    /// Total number of disks currently on the towers.
    pub fn total_disks(&self) -> usize {
        self.towers.iter().map(Tower::len).sum()
    }

    /// Returns true once every disk rests on the target tower.
    ///
    /// Disks only arrive through legal moves, so a full target tower is
    /// necessarily in order and the length check alone is sufficient.
    pub fn is_solved(&self) -> bool {
        self.tower(self.target).len() == self.disk_count.as_usize()
    }

    /// Returns true if the game is in its starting position.
    pub fn is_at_start(&self) -> bool {
        self.tower(Self::START).len() == self.disk_count.as_usize()
    }

    /// Checks strict ordering on every tower and that disks `1..=N` each
    /// appear exactly once.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        for tower in &self.towers {
            if let Some((lower, upper)) = tower.first_unordered_pair() {
                return Err(InvariantViolation::Unordered {
                    peg: tower.peg(),
                    lower,
                    upper,
                });
            }
        }

        let mut seen = vec![false; self.disk_count.as_usize()];
        for disk in self.towers.iter().flat_map(|t| t.disks().iter().copied()) {
            let slot = usize::from(disk.size())
                .checked_sub(1)
                .and_then(|i| seen.get_mut(i))
                .ok_or(InvariantViolation::UnknownDisk {
                    disk,
                    count: self.disk_count,
                })?;
            if *slot {
                return Err(InvariantViolation::DiskDuplicated(disk));
            }
            *slot = true;
        }

        match seen.iter().position(|present| !present) {
            Some(missing) => Err(InvariantViolation::DiskMissing(Disk::new(missing as u8 + 1))),
            None => Ok(()),
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Moves the top disk of `from` onto `to`.
    ///
    /// On success returns the moved disk and increments the move counter.
    /// On failure the game is left untouched.
    pub fn try_move(&mut self, from: PegId, to: PegId) -> Result<Disk, MoveError> {
        if from == to {
            return Err(MoveError::SamePeg(from));
        }

        let disk = self
            .tower(from)
            .top()
            .ok_or(MoveError::EmptySource(from))?;

        if let Some(onto) = self.tower(to).top() {
            if disk > onto {
                return Err(MoveError::LargerOnSmaller { disk, onto, to });
            }
        }

        let popped = self.towers[from.index()].pop();
        debug_assert_eq!(popped, Some(disk));
        self.towers[to.index()].push(disk);
        self.move_count += 1;

        // Postcondition: the moved disk is now on top of the destination
        debug_assert_eq!(self.tower(to).top(), Some(disk));

        Ok(disk)
    }

    /// Boolean form of [`Game::try_move`]: `true` if the move was made.
    pub fn move_disk(&mut self, from: PegId, to: PegId) -> bool {
        self.try_move(from, to).is_ok()
    }

    /// Applies a [`Move`] value. Same semantics as [`Game::try_move`].
    pub fn apply(&mut self, mv: Move) -> Result<Disk, MoveError> {
        self.try_move(mv.from, mv.to)
    }

    /// Returns to the starting position, keeping size and target.
    pub fn reset(&mut self) {
        *self = Self::starting_position(self.disk_count, self.target);
    }

    /// Resets the game and plays the optimal solution onto the target tower.
    ///
    /// Returns the number of moves made, always `2^n - 1`.
    pub fn solve(&mut self) -> u64 {
        self.reset();
        let Some(auxiliary) = PegId::spare(Self::START, self.target) else {
            // Target is the start peg: nothing to move.
            return 0;
        };
        let (n, target) = (self.disk_count.get(), self.target);
        solver::solve(self, n, Self::START, auxiliary, target);

        // Postcondition: optimal and complete
        assert_eq!(self.move_count, self.disk_count.optimal_moves());
        assert!(self.is_solved(), "solver must finish on the target tower");

        self.move_count
    }
}

/// Unchecked wire form of [`Game`].
#[derive(Deserialize)]
struct GameSnapshot {
    towers: [Tower; 3],
    disk_count: DiskCount,
    target: PegId,
    move_count: u64,
}

impl TryFrom<GameSnapshot> for Game {
    type Error = SnapshotError;

    fn try_from(raw: GameSnapshot) -> Result<Self, Self::Error> {
        if raw.target == Self::START {
            return Err(SnapshotError::StartAsTarget(raw.target));
        }
        for (slot, tower) in PegId::ALL.into_iter().zip(&raw.towers) {
            if tower.peg() != slot {
                return Err(SnapshotError::MisplacedTower {
                    slot,
                    found: tower.peg(),
                });
            }
        }

        let game = Self {
            towers: raw.towers,
            disk_count: raw.disk_count,
            target: raw.target,
            move_count: raw.move_count,
        };
        game.check_invariants()?;
        Ok(game)
    }
}

/// Free-function form of [`Game::is_solved`].
pub fn solved(game: &Game) -> bool {
    game.is_solved()
}

#[cfg(test)]
impl Game {
    /// Builds an arbitrary position for tests. Towers are given bottom to top.
    pub(crate) fn from_towers(a: &[u8], b: &[u8], c: &[u8]) -> Self {
        let count = a.len() + b.len() + c.len();
        let disks = |sizes: &[u8]| sizes.iter().map(|s| Disk::new(*s)).collect::<Vec<_>>();
        Self {
            towers: [
                Tower::with_disks(PegId::A, disks(a)),
                Tower::with_disks(PegId::B, disks(b)),
                Tower::with_disks(PegId::C, disks(c)),
            ],
            disk_count: DiskCount::new(count as u8).expect("test position has disks"),
            target: PegId::C,
            move_count: 0,
        }
    }
}
