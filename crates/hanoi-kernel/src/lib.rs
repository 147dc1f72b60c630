//! # hanoi-kernel: Functional core of `Hanoi`
//!
//! The kernel is the pure, deterministic heart of the puzzle. It owns the
//! three towers, enforces the single legal-move rule, and computes the
//! optimal solution.
//!
//! ## Key Principles
//!
//! - **No IO**: rendering and input belong to the caller
//! - **One mutator**: [`Game::try_move`] is the only way disks change towers
//! - **Rejected moves are values**: illegal moves return [`MoveError`], the
//!   game is untouched
//!
//! ## Architecture
//!
//! - [`tower`]: an ordered stack of disks
//! - [`game`]: three towers, the move executor, and the win check
//! - [`solver`]: the recursive `2^n - 1` solution, eager and lazy
//! - [`command`] / [`effects`]: commands for a front end and what they produced
//! - [`kernel`]: the `apply_committed` function that ties it all together
//!
//! ## Example
//!
//! ```
//! use hanoi_kernel::Game;
//! use hanoi_types::{DiskCount, PegId};
//!
//! let mut game = Game::new(DiskCount::new(2).unwrap());
//! assert!(game.move_disk(PegId::A, PegId::B));
//! assert!(!game.move_disk(PegId::A, PegId::B)); // 2 onto 1
//! assert_eq!(game.move_count(), 1);
//!
//! assert_eq!(game.solve(), 3);
//! assert!(game.is_solved());
//! ```

pub mod command;
pub mod effects;
pub mod game;
pub mod kernel;
pub mod solver;
pub mod tower;


// Kani verification harnesses for bounded model checking
#[cfg(kani)]
mod kani_proofs;

// Re-export commonly used items
pub use command::Command;
pub use effects::Effect;
pub use game::{Game, InvariantViolation, MoveError, SnapshotError, solved};
pub use kernel::{KernelError, apply_committed, apply_committed_batch};
pub use solver::{Solution, solution, solve};
pub use tower::Tower;
