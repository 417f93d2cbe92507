//! Normal-play Nim: last stone taken wins.

use crate::core::{GameRng, GameVariant, Move, PileState};

use super::{fallback, nim_sum, Strategy};

/// Optimal normal-play Nim.
///
/// With a nonzero nim-sum the mover can always reach a nim-sum-zero
/// position, which is losing for the other side.
#[derive(Clone, Copy, Debug, Default)]
pub struct NormalNim;

/// The move that leaves the position with nim-sum zero, if one exists.
///
/// Scans piles in index order and takes the first pile whose size strictly
/// shrinks when XORed with the nim-sum; reducing it to exactly that XOR
/// zeroes the sum. Returns `None` when the nim-sum is already zero.
#[must_use]
pub fn winning_move(piles: &[u8]) -> Option<Move> {
    let sum = nim_sum(piles);
    if sum == 0 {
        return None;
    }
    piles.iter().enumerate().find_map(|(i, &pile)| {
        let target = pile ^ sum;
        (target < pile).then(|| Move::take(i, pile - target))
    })
}

impl Strategy for NormalNim {
    fn variant(&self) -> GameVariant {
        GameVariant::Normal
    }

    fn select_move(&self, state: &PileState, rng: &mut GameRng) -> Move {
        winning_move(state.piles())
            .unwrap_or_else(|| fallback::random_move(state.piles(), self.variant(), rng))
    }
}
