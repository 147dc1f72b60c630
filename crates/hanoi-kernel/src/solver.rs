//! Optimal solver for the three-peg puzzle.
//!
//! Moving `n` disks from `source` to `target`:
//!
//! 1. move the top `n - 1` disks from `source` to `auxiliary` (via `target`)
//! 2. move the largest disk from `source` to `target`
//! 3. move the `n - 1` disks from `auxiliary` to `target` (via `source`)
//!
//! This issues exactly `2^n - 1` moves, the proven lower bound. Every move is
//! legal by induction: the `n - 1` smaller disks are only ever stacked on
//! pegs whose top is larger than all of them.
//!
//! Three forms are provided:
//! - [`solve`] plays the recursion directly against a [`Game`]
//! - [`solution`] returns the plan as a `Vec<Move>`
//! - [`Solution`] yields the same plan lazily with an explicit stack

use hanoi_types::{DiskCount, Move, PegId};

use crate::game::Game;

/// Plays the optimal solution for the top `n` disks of `source` onto `target`.
///
/// Precondition: the top `n` disks of `source` are `1..=n` and every disk on
/// `auxiliary` and `target` is larger than `n`. A fresh game satisfies this
/// for `solve(game, N, A, B, C)`.
///
/// Returns the number of moves made.
///
/// # Panics
///
/// Panics if the precondition is violated, since the executor then rejects
/// a move the recursion guarantees to be legal.
pub fn solve(game: &mut Game, n: u8, source: PegId, auxiliary: PegId, target: PegId) -> u64 {
    if n == 0 {
        return 0;
    }
    if n == 1 {
        play(game, source, target);
        return 1;
    }

    let mut moves = solve(game, n - 1, source, target, auxiliary);
    play(game, source, target);
    moves += 1;
    moves += solve(game, n - 1, auxiliary, source, target);
    moves
}

fn play(game: &mut Game, from: PegId, to: PegId) {
    if let Err(e) = game.try_move(from, to) {
        panic!("solver issued an illegal move {from} -> {to}: {e}");
    }
}

/// Returns the optimal plan for moving `n` disks as a vector.
///
/// # Examples
///
/// ```
/// # use hanoi_kernel::solver::solution;
/// # use hanoi_types::{Move, PegId::*};
/// let plan = solution(2, A, B, C);
/// assert_eq!(plan, vec![Move::new(A, B), Move::new(A, C), Move::new(B, C)]);
/// ```
pub fn solution(n: u8, source: PegId, auxiliary: PegId, target: PegId) -> Vec<Move> {
    let mut plan = Vec::new();
    collect(&mut plan, n, source, auxiliary, target);
    plan
}

fn collect(plan: &mut Vec<Move>, n: u8, source: PegId, auxiliary: PegId, target: PegId) {
    if n == 0 {
        return;
    }
    collect(plan, n - 1, source, target, auxiliary);
    plan.push(Move::new(source, target));
    collect(plan, n - 1, auxiliary, source, target);
}

// ============================================================================
// Lazy plan
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum Frame {
    Solve {
        n: u8,
        source: PegId,
        auxiliary: PegId,
        target: PegId,
    },
    Emit(Move),
}

/// Iterator over the optimal plan, in the same order as [`solution`].
///
/// Holds at most `2n` frames, so even a 63-disk plan can be streamed
/// without materialising `2^63` moves.
#[derive(Debug, Clone)]
pub struct Solution {
    stack: Vec<Frame>,
    remaining: u64,
}

impl Solution {
    /// Creates the plan for moving `disks` from `source` to `target`.
    ///
    /// [`DiskCount`] is bounded by 63, so the move total always fits in a `u64`.
    pub fn new(disks: DiskCount, source: PegId, auxiliary: PegId, target: PegId) -> Self {
        let n = disks.get();
        Self {
            stack: vec![Frame::Solve {
                n,
                source,
                auxiliary,
                target,
            }],
            remaining: (1u64 << n) - 1,
        }
    }

    /// Moves left to yield.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl Iterator for Solution {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Emit(mv) => {
                    self.remaining -= 1;
                    return Some(mv);
                }
                Frame::Solve { n: 0, .. } => {}
                Frame::Solve {
                    n,
                    source,
                    auxiliary,
                    target,
                } => {
                    // Pushed in reverse so they pop in recursion order.
                    self.stack.push(Frame::Solve {
                        n: n - 1,
                        source: auxiliary,
                        auxiliary: source,
                        target,
                    });
                    self.stack.push(Frame::Emit(Move::new(source, target)));
                    self.stack.push(Frame::Solve {
                        n: n - 1,
                        source,
                        auxiliary: target,
                        target: auxiliary,
                    });
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
