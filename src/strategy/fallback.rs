//! Shared randomized fallback policy.
//!
//! Reached only from a position that is already lost for the mover (or when
//! no algebraic winning move is derivable): a uniformly random nonempty
//! pile, then a uniformly random count from it. Intentionally non-optimal,
//! and reproducible because it draws from the injected seedable RNG.

use crate::core::{GameRng, GameVariant, Move};
use crate::rules::move_for_variant;

/// Pick a uniformly random legal move.
///
/// Precondition (caller-enforced): at least one pile is nonempty. Cascade
/// semantics are applied when the variant calls for them.
pub fn random_move(piles: &[u8], variant: GameVariant, rng: &mut GameRng) -> Move {
    let nonempty: Vec<usize> = piles
        .iter()
        .enumerate()
        .filter(|(_, &pile)| pile > 0)
        .map(|(i, _)| i)
        .collect();
    debug_assert!(!nonempty.is_empty(), "fallback invoked on a terminal state");

    let pile_index = nonempty[rng.gen_range_usize(0..nonempty.len())];
    let stone_count = rng.gen_stone_count(1..=piles[pile_index]);
    move_for_variant(variant, pile_index, stone_count)
}
