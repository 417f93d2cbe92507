//! Staircase Nim: removed stones cascade into the preceding pile.
//!
//! Stones pushed into an odd-indexed pile can be pushed right back out, so
//! only the even-indexed piles act as effective heaps; the odd-indexed ones
//! are buffers. This even-index reduction is the contractual behavior of
//! the engine and is applied as given, not re-derived.

use crate::core::{GameRng, GameVariant, Move, PileState};

use super::{fallback, Strategy};
use crate::rules::move_for_variant;

/// Optimal staircase Nim over the even-indexed effective heaps.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaircaseNim;

/// XOR of the even-indexed piles only.
#[must_use]
pub fn heap_nim_sum(piles: &[u8]) -> u8 {
    piles
        .iter()
        .step_by(2)
        .fold(0, |sum, &pile| sum ^ pile)
}

/// The move that zeroes the effective-heap nim-sum, if one exists.
///
/// Scans even indices in order; the chosen removal cascades into the
/// preceding (odd-indexed) buffer pile whenever it comes off a pile other
/// than the first.
#[must_use]
pub fn winning_move(piles: &[u8]) -> Option<Move> {
    let sum = heap_nim_sum(piles);
    if sum == 0 {
        return None;
    }
    piles
        .iter()
        .enumerate()
        .step_by(2)
        .find_map(|(i, &pile)| {
            let target = pile ^ sum;
            (target < pile).then(|| move_for_variant(GameVariant::Staircase, i, pile - target))
        })
}

impl Strategy for StaircaseNim {
    fn variant(&self) -> GameVariant {
        GameVariant::Staircase
    }

    fn select_move(&self, state: &PileState, rng: &mut GameRng) -> Move {
        winning_move(state.piles())
            .unwrap_or_else(|| fallback::random_move(state.piles(), self.variant(), rng))
    }
}
