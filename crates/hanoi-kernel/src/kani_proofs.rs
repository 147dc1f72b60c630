//! Kani verification harnesses for the move executor
//!
//! Bounded model checking proofs of the single legal-move rule.
//!
//! # Running Proofs
//!
//! ```bash
//! cargo kani --package hanoi-kernel
//! ```

#[cfg(kani)]
mod verification {
    use hanoi_types::{DiskCount, PegId};

    use crate::game::Game;

    fn any_peg() -> PegId {
        let i: u8 = kani::any();
        kani::assume(i < 3);
        PegId::ALL[usize::from(i)]
    }

    fn any_game() -> Game {
        let n: u8 = kani::any();
        kani::assume((1..=3).contains(&n));
        Game::new(DiskCount::new(n).unwrap())
    }

    /// **Proof 1: a rejected move never mutates the game**
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_rejected_move_is_pure() {
        let mut game = any_game();
        let _ = game.try_move(any_peg(), any_peg());

        let before = game.clone();
        let result = game.try_move(any_peg(), any_peg());
        if result.is_err() {
            assert!(game == before);
        }
    }

    /// **Proof 2: accepted moves increment the counter by exactly one**
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_accepted_move_counts_once() {
        let mut game = any_game();
        let before = game.move_count();
        if game.try_move(any_peg(), any_peg()).is_ok() {
            assert_eq!(game.move_count(), before + 1);
        }
    }

    /// **Proof 3: two arbitrary moves keep every tower strictly ordered**
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_ordering_preserved() {
        let mut game = any_game();
        let _ = game.try_move(any_peg(), any_peg());
        let _ = game.try_move(any_peg(), any_peg());
        assert!(game.check_invariants().is_ok());
    }
}
